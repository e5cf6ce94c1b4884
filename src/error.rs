//! Error types for copydeck operations.

use thiserror::Error;

/// Why the content document could not be acquired.
///
/// Any of these aborts a bind run before a single region is touched.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not fetch {resource}: {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    #[error("fetching {resource} returned status {status}")]
    Status { resource: String, status: u16 },

    #[error("{resource} is not a valid content document: {source}")]
    Malformed {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Name of the resource that failed to load.
    pub fn resource(&self) -> &str {
        match self {
            LoadError::Io { resource, .. }
            | LoadError::Status { resource, .. }
            | LoadError::Malformed { resource, .. } => resource,
        }
    }
}

/// Errors surfaced by the library and the CLI.
///
/// Binding itself never fails; these come from the edges (reading a
/// skeleton, writing output, compiling a caller-supplied selector).
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("content unavailable: {0}")]
    Load(#[from] LoadError),

    #[error("invalid selector: {0}")]
    InvalidSelector(String),
}

pub type Result<T> = std::result::Result<T, Error>;
