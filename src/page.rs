//! The page skeleton and its primitive writers.
//!
//! Every writer here is total: a selector that matches nothing (or does not
//! parse) is an expected condition and leaves the page as it was.

use tracing::{debug, trace};

use crate::dom::{Dom, Locator, NodeId, parse_document, parse_fragment, serialize};
use crate::error::Result;
use crate::events::{EventKind, ListenerRegistry};
use crate::util::{decode_text, extract_meta_charset, is_utf8_label};

/// A parsed skeleton plus the delegated listeners registered on it.
pub struct Page {
    dom: Dom,
    listeners: ListenerRegistry,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self::from_dom(parse_document(html))
    }

    /// Parse raw bytes, honouring a `<meta charset>` hint for non-UTF-8 files.
    ///
    /// [`Page::to_html`] always produces UTF-8, so any other declared charset
    /// is rewritten to `utf-8` here.
    pub fn parse_bytes(bytes: &[u8]) -> Self {
        let html = decode_text(bytes, extract_meta_charset(bytes));
        let mut page = Self::parse(&html);
        page.declare_utf8();
        page
    }

    fn declare_utf8(&mut self) {
        for id in self.locate_all("meta[charset]") {
            if !is_utf8_label(self.dom.get_attr(id, "charset")) {
                debug!(from = ?self.dom.get_attr(id, "charset"), "redeclaring charset as utf-8");
                self.dom.set_attr(id, "charset", "utf-8");
            }
        }
        for id in self.locate_all("meta[http-equiv][content]") {
            let stale = self
                .dom
                .get_attr(id, "http-equiv")
                .is_some_and(|v| v.trim().eq_ignore_ascii_case("content-type"))
                && self
                    .dom
                    .get_attr(id, "content")
                    .and_then(|c| extract_meta_charset(c.as_bytes()))
                    .is_some_and(|label| !is_utf8_label(Some(label)));
            if stale {
                debug!("redeclaring content-type charset as utf-8");
                self.dom.set_attr(id, "content", "text/html; charset=utf-8");
            }
        }
    }

    pub fn from_dom(dom: Dom) -> Self {
        Self {
            dom,
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Serialize the whole page.
    pub fn to_html(&self) -> Result<String> {
        Ok(serialize::to_html(&self.dom)?)
    }

    /// `innerHTML` of the first element matching `selector`.
    pub fn inner_html(&self, selector: &str) -> Option<String> {
        let id = self.locate(selector)?;
        serialize::inner_html(&self.dom, id).ok()
    }

    /// `textContent` of the first element matching `selector`.
    pub fn text_of(&self, selector: &str) -> Option<String> {
        self.locate(selector).map(|id| self.dom.deep_text(id))
    }

    // --- Lookup ---

    pub fn locate(&self, selector: &str) -> Option<NodeId> {
        self.locate_in(self.dom.document(), selector)
    }

    pub fn locate_all(&self, selector: &str) -> Vec<NodeId> {
        self.locate_all_in(self.dom.document(), selector)
    }

    /// First descendant of `scope` matching `selector`.
    pub fn locate_in(&self, scope: NodeId, selector: &str) -> Option<NodeId> {
        let locator = compile(selector)?;
        let found = self.dom.select_first(scope, &locator);
        if found.is_none() {
            trace!(selector, "location not in skeleton");
        }
        found
    }

    pub fn locate_all_in(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        compile(selector)
            .map(|locator| self.dom.select_all(scope, &locator))
            .unwrap_or_default()
    }

    // --- Scalar writers ---

    /// Replace the first match's content with inert text.
    pub fn write_text(&mut self, selector: &str, value: &str) {
        if let Some(id) = self.locate(selector) {
            self.dom.set_text(id, value);
        }
    }

    /// Replace the first match's children with `value` parsed as markup.
    pub fn write_markup(&mut self, selector: &str, value: &str) {
        if let Some(id) = self.locate(selector) {
            self.set_markup(id, value);
        }
    }

    pub fn write_text_in(&mut self, scope: NodeId, selector: &str, value: &str) {
        if let Some(id) = self.locate_in(scope, selector) {
            self.dom.set_text(id, value);
        }
    }

    pub fn write_markup_in(&mut self, scope: NodeId, selector: &str, value: &str) {
        if let Some(id) = self.locate_in(scope, selector) {
            self.set_markup(id, value);
        }
    }

    /// Set one attribute on the first match.
    pub fn write_attr(&mut self, selector: &str, attr: &str, value: &str) {
        if let Some(id) = self.locate(selector) {
            self.dom.set_attr(id, attr, value);
        }
    }

    /// Markup lines joined with `<br>`, for multi-line headings.
    pub fn write_lines(&mut self, selector: &str, lines: &[String]) {
        self.write_markup(selector, &lines.join("<br>"));
    }

    pub fn write_lines_in(&mut self, scope: NodeId, selector: &str, lines: &[String]) {
        self.write_markup_in(scope, selector, &lines.join("<br>"));
    }

    /// Set `href` and replace the visible text of a link.
    pub fn write_link(&mut self, selector: &str, href: &str, label: &str) {
        if let Some(id) = self.locate(selector) {
            self.dom.set_attr(id, "href", href);
            self.dom.set_text(id, label);
        }
    }

    /// Replace `id`'s children with parsed markup.
    pub fn set_markup(&mut self, id: NodeId, value: &str) {
        let (fragment, body) = parse_fragment(value);
        self.dom.clear_children(id);
        self.dom.import_children(&fragment, body, id);
    }

    /// Update a link's `href` and its label text while keeping any element
    /// children (icons) in place.
    ///
    /// Only the first immediate text child with visible content is rewritten;
    /// its surrounding whitespace is kept so spacing next to the icon
    /// survives. With no such text child, only `href` changes.
    pub fn patch_link_label(&mut self, selector: &str, href: &str, label: &str) {
        let Some(link) = self.locate(selector) else {
            return;
        };
        self.dom.set_attr(link, "href", href);

        let text_node = self.dom.children(link).find(|&child| {
            self.dom
                .text_content(child)
                .is_some_and(|t| !t.trim().is_empty())
        });
        let Some(text_node) = text_node else {
            trace!(selector, "link has no text node to relabel");
            return;
        };

        let current = self.dom.text_content(text_node).unwrap_or_default();
        let leading = &current[..current.len() - current.trim_start().len()];
        let trailing = &current[current.trim_end().len()..];
        let replacement = format!("{leading}{label}{trailing}");
        self.dom.replace_text(text_node, &replacement);
    }

    // --- Events ---

    /// Register a delegated listener; see [`ListenerRegistry::listen`].
    pub fn listen<F>(&mut self, container: NodeId, event: EventKind, key: &str, handler: F) -> bool
    where
        F: Fn(&mut Dom, NodeId, NodeId) + 'static,
    {
        self.listeners.listen(container, event, key, handler)
    }

    /// Fire `event` at `target`. Returns how many handlers ran.
    pub fn dispatch(&mut self, event: EventKind, target: NodeId) -> usize {
        self.listeners.dispatch(&mut self.dom, event, target)
    }
}

fn compile(selector: &str) -> Option<Locator> {
    match Locator::parse(selector) {
        Ok(locator) => Some(locator),
        Err(e) => {
            debug!(selector, error = %e, "skipping write");
            None
        }
    }
}
