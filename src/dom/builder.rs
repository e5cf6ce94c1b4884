//! Small element builder for generating list entries.
//!
//! Templates describe a fragment as a value tree, then [`Dom::build`] turns it
//! into fresh, unattached nodes.
//!
//! ```
//! use copydeck::dom::{Dom, El};
//!
//! let mut dom = Dom::new();
//! let li = dom.build(El::new("li").child(El::new("a").attr("href", "#about").text("About")));
//! assert_eq!(dom.deep_text(li), "About");
//! ```

use super::arena::{Attribute, Dom, NodeId};
use super::parse_fragment;

/// One element of a fragment under construction.
#[derive(Debug, Clone)]
pub struct El {
    tag: String,
    attrs: Vec<Attribute>,
    children: Vec<Child>,
}

#[derive(Debug, Clone)]
enum Child {
    Element(El),
    /// Inert text.
    Text(String),
    /// Trusted markup, parsed on build.
    Markup(String),
}

impl El {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push(Attribute::new(name, value));
        self
    }

    /// Set an attribute only when a value is present.
    pub fn attr_opt(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, child: El) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    /// Append inert text. Empty strings add nothing.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(Child::Text(text));
        }
        self
    }

    /// Append parsed markup.
    pub fn markup(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Child::Markup(markup.into()));
        self
    }
}

impl Dom {
    /// Materialize `el` as a new unattached subtree and return its root.
    pub fn build(&mut self, el: El) -> NodeId {
        let root = self.create_html_element(&el.tag, el.attrs);
        for child in el.children {
            match child {
                Child::Element(inner) => {
                    let node = self.build(inner);
                    self.append(root, node);
                }
                Child::Text(text) => {
                    let node = self.create_text(text);
                    self.append(root, node);
                }
                Child::Markup(markup) => {
                    let (fragment, body) = parse_fragment(&markup);
                    self.import_children(&fragment, body, root);
                }
            }
        }
        root
    }
}
