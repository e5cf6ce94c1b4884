//! # copydeck
//!
//! Binds a JSON content document onto a static landing-page skeleton.
//!
//! The skeleton is ordinary HTML that already renders on its own, with
//! placeholder copy. The content document carries the real copy, grouped by
//! page region. Binding locates each region's slots by selector and rewrites
//! them; any slot that is missing from the skeleton, and any region missing
//! from the document, is simply left alone.
//!
//! ## Quick Start
//!
//! ```
//! let skeleton = r#"<html><head><title>Placeholder</title></head>
//!     <body><h1 class="hero-title">Placeholder</h1></body></html>"#;
//! let content = r#"{"meta": {"title": "NosoTrack"}, "hero": {"title": ["Early", "warning"]}}"#;
//!
//! let html = copydeck::bind_html(skeleton, content).unwrap();
//! assert!(html.contains("<title>NosoTrack</title>"));
//! assert!(html.contains(r#"<h1 class="hero-title">Early<br>warning</h1>"#));
//! ```
//!
//! ## Working with Pages
//!
//! [`Page`] owns the parsed skeleton. [`Binder`] acquires a document from a
//! [`ContentSource`] and applies it:
//!
//! ```no_run
//! use copydeck::{Binder, DirSource, Page};
//!
//! let bytes = std::fs::read("site/index.html").unwrap();
//! let mut page = Page::parse_bytes(&bytes);
//!
//! let source = DirSource::beside("site/index.html".as_ref());
//! let outcome = Binder::default().run(&source, &mut page);
//! if outcome.is_bound() {
//!     std::fs::write("site/index.html", page.to_html().unwrap()).unwrap();
//! }
//! ```

pub mod bind;
pub mod content;
pub mod dom;
pub mod error;
pub mod events;
pub mod observer;
pub mod page;
pub mod source;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use bind::{BindOptions, BindOutcome, Binder, Region};
pub use content::ContentDocument;
pub use error::{Error, LoadError, Result};
pub use events::EventKind;
pub use observer::{NoopObserver, RecordingObserver, RevealObserver};
pub use page::Page;
pub use source::{ContentSource, DirSource, Fetched, StaticSource};

/// Bind `content_json` onto `skeleton` and serialize the result.
///
/// Unlike [`Binder::run`], a content document that fails to load is an
/// error here, so callers can tell a bound page from an untouched one.
pub fn bind_html(skeleton: &str, content_json: &str) -> Result<String> {
    let mut page = Page::parse(skeleton);
    let source = StaticSource::json(content_json);
    match Binder::default().run(&source, &mut page) {
        BindOutcome::Bound(_) => page.to_html(),
        BindOutcome::Skipped(err) => Err(err.into()),
    }
}
