//! Mutable HTML tree for page skeletons.
//!
//! The skeleton is parsed with html5ever into an arena ([`Dom`]), queried
//! with CSS selectors ([`Locator`]), edited in place, and serialized back.
//!
//! # Example
//!
//! ```
//! use copydeck::dom::{parse_document, Locator};
//!
//! let mut dom = parse_document(r#"<h1 class="hero-title">Old</h1>"#);
//! let title = dom
//!     .select_first(dom.document(), &Locator::parse(".hero-title").unwrap())
//!     .unwrap();
//! dom.set_text(title, "New");
//! assert_eq!(dom.deep_text(title), "New");
//! ```

mod arena;
mod builder;
mod element_ref;
mod selector;
pub mod serialize;
mod tree_sink;

pub use arena::{Attribute, Dom, Node, NodeData, NodeId, html_name};
pub use builder::El;
pub use element_ref::{ElementRef, PageSelectors};
pub use selector::Locator;

use html5ever::driver::ParseOpts;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;

use tree_sink::DomSink;

/// Parse a full HTML document.
pub fn parse_document(html: &str) -> Dom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: false,
            ..Default::default()
        },
        ..Default::default()
    };

    html5ever::parse_document(DomSink::new(), opts)
        .from_utf8()
        .one(html.as_bytes())
        .into_dom()
}

/// Parse a markup fragment as body content.
///
/// Returns the scratch tree and the `<body>` whose children are the
/// fragment's nodes.
pub fn parse_fragment(markup: &str) -> (Dom, NodeId) {
    let wrapped = format!("<!DOCTYPE html><html><head></head><body>{markup}</body></html>");
    let dom = parse_document(&wrapped);
    let body = dom.find_by_tag("body").unwrap_or_else(|| dom.document());
    (dom, body)
}
