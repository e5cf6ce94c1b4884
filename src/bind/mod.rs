//! The binder: content document in, skeleton edits out.
//!
//! A run acquires the content document once, then applies each region
//! binding in a fixed order. If acquisition fails nothing is written and the
//! skeleton keeps its authored defaults.
//!
//! ```
//! use copydeck::{Binder, BindOptions, Page, StaticSource};
//!
//! let mut page = Page::parse(r#"<p class="hero-eyebrow">Placeholder</p>"#);
//! let source = StaticSource::json(r#"{"hero": {"eyebrow": "Now live"}}"#);
//!
//! let outcome = Binder::new(BindOptions::default()).run(&source, &mut page);
//! assert!(outcome.is_bound());
//! assert_eq!(page.text_of(".hero-eyebrow").unwrap(), "Now live");
//! ```

mod list;
mod logo;
pub mod markers;
mod regions;

pub use list::{bind_positional, rebuild_children, rebuild_list};
pub use logo::{logo_markup, logo_markup_with};

use std::fmt;
use std::time::Duration;

use tracing::{debug, warn};

use crate::content::ContentDocument;
use crate::error::LoadError;
use crate::observer::{NoopObserver, RevealObserver};
use crate::page::Page;
use crate::source::{ContentSource, DEFAULT_CONTENT_RESOURCE, acquire};

/// Knobs for a bind run.
#[derive(Debug, Clone)]
pub struct BindOptions {
    /// Resource name handed to the content source.
    pub content_resource: String,
    /// Wordmark suffix that gets the accent treatment.
    pub logo_token: String,
    /// Class of the span wrapping the accent suffix.
    pub accent_class: String,
    /// Extra reveal delay per team card after the first.
    pub reveal_stagger: Duration,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            content_resource: DEFAULT_CONTENT_RESOURCE.to_string(),
            logo_token: "Track".to_string(),
            accent_class: "accent".to_string(),
            reveal_stagger: Duration::from_millis(100),
        }
    }
}

/// Top-level regions, in binding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Meta,
    Nav,
    Hero,
    Marquee,
    About,
    Process,
    Research,
    Team,
    Contact,
    Footer,
}

impl Region {
    pub const ALL: [Region; 10] = [
        Region::Meta,
        Region::Nav,
        Region::Hero,
        Region::Marquee,
        Region::About,
        Region::Process,
        Region::Research,
        Region::Team,
        Region::Contact,
        Region::Footer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Region::Meta => "meta",
            Region::Nav => "nav",
            Region::Hero => "hero",
            Region::Marquee => "marquee",
            Region::About => "about",
            Region::Process => "process",
            Region::Research => "research",
            Region::Team => "team",
            Region::Contact => "contact",
            Region::Footer => "footer",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of [`Binder::run`].
#[derive(Debug)]
pub enum BindOutcome {
    /// Content loaded; lists the regions present in the document.
    Bound(Vec<Region>),
    /// Content could not be loaded; the page was not modified.
    Skipped(LoadError),
}

impl BindOutcome {
    pub fn is_bound(&self) -> bool {
        matches!(self, BindOutcome::Bound(_))
    }
}

/// Shared state handed to every region binding.
pub(crate) struct BindContext<'a> {
    pub page: &'a mut Page,
    pub options: &'a BindOptions,
    pub observer: &'a mut dyn RevealObserver,
}

/// Binds content documents onto pages.
pub struct Binder<O = NoopObserver> {
    options: BindOptions,
    observer: O,
}

impl Binder<NoopObserver> {
    pub fn new(options: BindOptions) -> Self {
        Self {
            options,
            observer: NoopObserver,
        }
    }
}

impl Default for Binder<NoopObserver> {
    fn default() -> Self {
        Self::new(BindOptions::default())
    }
}

impl<O: RevealObserver> Binder<O> {
    /// Replace the reveal observer.
    pub fn with_observer<P: RevealObserver>(self, observer: P) -> Binder<P> {
        Binder {
            options: self.options,
            observer,
        }
    }

    pub fn options(&self) -> &BindOptions {
        &self.options
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Acquire content from `source` and bind it onto `page`.
    ///
    /// Never fails: an acquisition error is logged and returned inside
    /// [`BindOutcome::Skipped`] with the page untouched.
    pub fn run<S: ContentSource + ?Sized>(&mut self, source: &S, page: &mut Page) -> BindOutcome {
        match acquire(source, &self.options.content_resource) {
            Ok(doc) => BindOutcome::Bound(self.bind(&doc, page)),
            Err(err) => {
                warn!(
                    error = %err,
                    "failed to load {}; if the page was opened straight from disk, serve the \
                     site over HTTP so the content document can be fetched. Showing the \
                     skeleton's default content.",
                    err.resource()
                );
                BindOutcome::Skipped(err)
            }
        }
    }

    /// Bind an already-acquired document. Returns the regions it contained.
    pub fn bind(&mut self, doc: &ContentDocument, page: &mut Page) -> Vec<Region> {
        let mut cx = BindContext {
            page,
            options: &self.options,
            observer: &mut self.observer,
        };

        let mut bound = Vec::new();
        for region in Region::ALL {
            let present = match region {
                Region::Meta => doc.meta.as_ref().map(|c| regions::meta::bind(&mut cx, c)),
                Region::Nav => doc.nav.as_ref().map(|c| regions::nav::bind(&mut cx, c)),
                Region::Hero => doc.hero.as_ref().map(|c| regions::hero::bind(&mut cx, c)),
                Region::Marquee => doc
                    .marquee
                    .as_deref()
                    .map(|c| regions::marquee::bind(&mut cx, c)),
                Region::About => doc.about.as_ref().map(|c| regions::about::bind(&mut cx, c)),
                Region::Process => doc
                    .process
                    .as_ref()
                    .map(|c| regions::process::bind(&mut cx, c)),
                Region::Research => doc
                    .research
                    .as_ref()
                    .map(|c| regions::research::bind(&mut cx, c)),
                Region::Team => doc.team.as_ref().map(|c| regions::team::bind(&mut cx, c)),
                Region::Contact => doc
                    .contact
                    .as_ref()
                    .map(|c| regions::contact::bind(&mut cx, c)),
                Region::Footer => doc.footer.as_ref().map(|c| regions::footer::bind(&mut cx, c)),
            };
            match present {
                Some(()) => {
                    debug!(%region, "region bound");
                    bound.push(region);
                }
                None => debug!(%region, "region absent from content; skipped"),
            }
        }
        bound
    }
}
