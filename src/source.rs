//! Content acquisition.
//!
//! A [`ContentSource`] hands back the raw response for a resource name;
//! [`acquire`] turns that into a [`ContentDocument`] or a single
//! [`LoadError`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::content::ContentDocument;
use crate::error::LoadError;

/// Well-known resource name of the content document, relative to the page.
pub const DEFAULT_CONTENT_RESOURCE: &str = "content.json";

/// Raw result of fetching a resource.
#[derive(Debug, Clone)]
pub struct Fetched {
    /// HTTP-style status; 2xx is success.
    pub status: u16,
    pub body: Vec<u8>,
}

impl Fetched {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Something that can fetch the content document.
///
/// Transport-level failures are reported as `Err`; a reachable resource
/// that answered with a non-success status is `Ok` with that status.
pub trait ContentSource {
    fn fetch(&self, resource: &str) -> Result<Fetched, LoadError>;
}

impl<T: ContentSource + ?Sized> ContentSource for &T {
    fn fetch(&self, resource: &str) -> Result<Fetched, LoadError> {
        (**self).fetch(resource)
    }
}

/// Fetch and parse the content document.
pub fn acquire<S: ContentSource + ?Sized>(
    source: &S,
    resource: &str,
) -> Result<ContentDocument, LoadError> {
    let fetched = source.fetch(resource)?;
    if !fetched.is_success() {
        return Err(LoadError::Status {
            resource: resource.to_string(),
            status: fetched.status,
        });
    }

    debug!(resource, bytes = fetched.body.len(), "content fetched");
    ContentDocument::from_json(&fetched.body).map_err(|source| LoadError::Malformed {
        resource: resource.to_string(),
        source,
    })
}

/// Serves resources from a directory, the way a static file server would.
///
/// A missing file answers 404; other I/O failures are transport errors.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory containing `page`, or the current directory for a bare name.
    pub fn beside(page: &Path) -> Self {
        let root = page
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for DirSource {
    fn fetch(&self, resource: &str) -> Result<Fetched, LoadError> {
        let path = self.root.join(resource);
        match fs::read(&path) {
            Ok(body) => Ok(Fetched::ok(body)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Fetched {
                status: 404,
                body: Vec::new(),
            }),
            Err(source) => Err(LoadError::Io {
                resource: path.display().to_string(),
                source,
            }),
        }
    }
}

/// Serves one fixed response for any resource name.
#[derive(Debug, Clone)]
pub struct StaticSource {
    response: Fetched,
}

impl StaticSource {
    pub fn new(response: Fetched) -> Self {
        Self { response }
    }

    pub fn json(body: impl Into<Vec<u8>>) -> Self {
        Self::new(Fetched::ok(body))
    }

    pub fn status(status: u16) -> Self {
        Self::new(Fetched {
            status,
            body: Vec::new(),
        })
    }
}

impl ContentSource for StaticSource {
    fn fetch(&self, _resource: &str) -> Result<Fetched, LoadError> {
        Ok(self.response.clone())
    }
}
