//! Arena-allocated, mutable HTML tree.
//!
//! The skeleton is parsed into this arena once, then edited in place by the
//! binder. Nodes are never freed: detached subtrees simply lose their links
//! and stay in the arena until the page is dropped.

use std::collections::HashMap;

use html5ever::{LocalName, Namespace, QualName, ns};

/// Unique identifier for a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value for no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this is a valid node ID.
    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Check if this is the sentinel value.
    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

/// Node payload.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root.
    Document,
    /// Element with name and attributes.
    Element {
        name: QualName,
        attrs: Vec<Attribute>,
        /// Cached `id` attribute for fast matching.
        id: Option<String>,
        /// Cached `class` tokens for fast matching.
        classes: Vec<String>,
    },
    Text(String),
    Comment(String),
    Doctype {
        name: String,
        public_id: String,
        system_id: String,
    },
}

/// HTML attribute.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

impl Attribute {
    /// Build a no-namespace attribute, the common case for HTML.
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.into(),
        }
    }
}

/// A node in the arena.
#[derive(Debug)]
pub struct Node {
    pub data: NodeData,
    pub parent: NodeId,
    pub first_child: NodeId,
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
        }
    }
}

/// Mutable arena DOM.
///
/// Parent/child/sibling links are indices into one vector, so node ids stay
/// stable across edits. A node keeps its id (and identity) for as long as the
/// tree lives, which is what lets callers hold on to an icon or a container
/// across a rebind.
pub struct Dom {
    nodes: Vec<Node>,
    document: NodeId,
    /// `id` attribute to node. Entries may point at detached nodes; lookups
    /// re-check attachment.
    id_map: HashMap<String, NodeId>,
}

impl Dom {
    /// Create a new empty DOM with a document root.
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            document: NodeId::NONE,
            id_map: HashMap::new(),
        };
        dom.document = dom.alloc(Node::new(NodeData::Document));
        dom
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the document root ID.
    pub fn document(&self) -> NodeId {
        self.document
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    /// Create a new, unattached element node.
    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> NodeId {
        let (id, classes) = extract_id_and_classes(&attrs);
        let node_id = self.alloc(Node::new(NodeData::Element {
            name,
            attrs,
            id: id.clone(),
            classes,
        }));

        if let Some(id_str) = id {
            self.id_map.insert(id_str, node_id);
        }

        node_id
    }

    /// Create an unattached element in the HTML namespace.
    pub fn create_html_element(&mut self, local: &str, attrs: Vec<Attribute>) -> NodeId {
        self.create_element(html_name(local), attrs)
    }

    pub fn create_text(&mut self, text: String) -> NodeId {
        self.alloc(Node::new(NodeData::Text(text)))
    }

    pub fn create_comment(&mut self, text: String) -> NodeId {
        self.alloc(Node::new(NodeData::Comment(text)))
    }

    pub fn create_doctype(&mut self, name: String, public_id: String, system_id: String) -> NodeId {
        self.alloc(Node::new(NodeData::Doctype {
            name,
            public_id,
            system_id,
        }))
    }

    /// Append a child to a parent node.
    ///
    /// The child must be unattached; callers detach first when moving nodes.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        let last_child = self.get(parent).map(|n| n.last_child).unwrap_or(NodeId::NONE);

        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = parent;
            child_node.prev_sibling = last_child;
            child_node.next_sibling = NodeId::NONE;
        }

        if last_child.is_some()
            && let Some(last_node) = self.get_mut(last_child)
        {
            last_node.next_sibling = child;
        }

        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }
    }

    /// Insert a node before a sibling.
    pub fn insert_before(&mut self, sibling: NodeId, new_node: NodeId) {
        let parent = self.get(sibling).map(|n| n.parent).unwrap_or(NodeId::NONE);
        let prev = self.get(sibling).map(|n| n.prev_sibling).unwrap_or(NodeId::NONE);

        if let Some(new) = self.get_mut(new_node) {
            new.parent = parent;
            new.prev_sibling = prev;
            new.next_sibling = sibling;
        }

        if let Some(sib) = self.get_mut(sibling) {
            sib.prev_sibling = new_node;
        }

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = new_node;
            }
        } else if let Some(par) = self.get_mut(parent) {
            par.first_child = new_node;
        }
    }

    /// Append text to an existing trailing text node, or create a new one.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        let last_child = self.get(parent).map(|n| n.last_child).unwrap_or(NodeId::NONE);

        if let Some(last) = self.get_mut(last_child)
            && let NodeData::Text(ref mut existing) = last.data
        {
            existing.push_str(text);
            return;
        }

        let text_node = self.create_text(text.to_string());
        self.append(parent, text_node);
    }

    /// Unlink a node from its parent and siblings. Its own subtree is kept.
    pub fn detach(&mut self, target: NodeId) {
        let (parent, prev, next) = match self.get(target) {
            Some(n) => (n.parent, n.prev_sibling, n.next_sibling),
            None => return,
        };

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = next;
        }

        if next.is_some() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.last_child = prev;
        }

        if let Some(node) = self.get_mut(target) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
    }

    /// Detach every child of `parent`. Returns how many were removed.
    pub fn clear_children(&mut self, parent: NodeId) -> usize {
        let children: Vec<_> = self.children(parent).collect();
        for child in &children {
            self.detach(*child);
        }
        children.len()
    }

    /// Replace all children of `parent` with a single text node.
    ///
    /// An empty string leaves the element with no children at all.
    pub fn set_text(&mut self, parent: NodeId, text: &str) {
        self.clear_children(parent);
        if !text.is_empty() {
            let node = self.create_text(text.to_string());
            self.append(parent, node);
        }
    }

    /// Overwrite the payload of a text node. Returns false for non-text nodes.
    pub fn replace_text(&mut self, id: NodeId, text: &str) -> bool {
        match self.get_mut(id) {
            Some(Node {
                data: NodeData::Text(existing),
                ..
            }) => {
                existing.clear();
                existing.push_str(text);
                true
            }
            _ => false,
        }
    }

    /// Set (or add) an attribute, keeping the id/class caches in sync.
    pub fn set_attr(&mut self, id: NodeId, attr_name: &str, value: &str) {
        let mut new_id = None;
        if let Some(Node {
            data:
                NodeData::Element {
                    attrs,
                    id: cached_id,
                    classes,
                    ..
                },
            ..
        }) = self.get_mut(id)
        {
            match attrs.iter_mut().find(|a| a.name.local.as_ref() == attr_name) {
                Some(existing) => existing.value = value.to_string(),
                None => attrs.push(Attribute::new(attr_name, value)),
            }
            match attr_name {
                "id" => {
                    *cached_id = Some(value.to_string());
                    new_id = Some(value.to_string());
                }
                "class" => *classes = split_classes(value),
                _ => {}
            }
        }
        if let Some(key) = new_id {
            self.id_map.insert(key, id);
        }
    }

    /// Remove an attribute if present.
    pub fn remove_attr(&mut self, id: NodeId, attr_name: &str) {
        if let Some(Node {
            data:
                NodeData::Element {
                    attrs,
                    id: cached_id,
                    classes,
                    ..
                },
            ..
        }) = self.get_mut(id)
        {
            attrs.retain(|a| a.name.local.as_ref() != attr_name);
            match attr_name {
                "id" => *cached_id = None,
                "class" => classes.clear(),
                _ => {}
            }
        }
    }

    /// Add a class token unless already present.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if self.has_class(id, class) || !self.is_element(id) {
            return;
        }
        let mut classes = self.element_classes(id).to_vec();
        classes.push(class.to_string());
        self.set_attr(id, "class", &classes.join(" "));
    }

    /// Remove a class token if present.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if !self.has_class(id, class) {
            return;
        }
        let classes: Vec<_> = self
            .element_classes(id)
            .iter()
            .filter(|c| c.as_str() != class)
            .cloned()
            .collect();
        self.set_attr(id, "class", &classes.join(" "));
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element_classes(id).iter().any(|c| c == class)
    }

    /// Get node by id attribute, ignoring nodes no longer in the document.
    pub fn get_by_id(&self, id: &str) -> Option<NodeId> {
        self.id_map
            .get(id)
            .copied()
            .filter(|&node| self.element_id(node) == Some(id) && self.is_attached(node))
    }

    /// True if the node is reachable from the document root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.ancestors(id).any(|a| a == self.document)
    }

    /// Get the number of nodes ever allocated.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the DOM is empty (only has document root).
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: NodeId) -> ChildrenIter<'_> {
        let first = self.get(parent).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        ChildrenIter {
            dom: self,
            current: first,
        }
    }

    /// Iterate from `id` (inclusive) up to the root.
    pub fn ancestors(&self, id: NodeId) -> AncestorsIter<'_> {
        AncestorsIter {
            dom: self,
            current: id,
        }
    }

    /// Pre-order traversal of the subtree below `root` (exclusive).
    pub fn descendants(&self, root: NodeId) -> DescendantsIter<'_> {
        let mut stack: Vec<_> = self.children(root).collect();
        stack.reverse();
        DescendantsIter { dom: self, stack }
    }

    /// Find the first node matching a predicate, in document order.
    pub fn find<F>(&self, predicate: F) -> Option<NodeId>
    where
        F: Fn(&Node) -> bool,
    {
        self.descendants(self.document)
            .find(|&id| self.get(id).is_some_and(&predicate))
    }

    /// Find element by tag name (first match).
    pub fn find_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.find(|node| match &node.data {
            NodeData::Element { name, .. } => name.local.as_ref() == tag,
            _ => false,
        })
    }

    /// Deep-copy the children of `from_parent` in `source` under `into` here.
    pub fn import_children(&mut self, source: &Dom, from_parent: NodeId, into: NodeId) {
        for child in source.children(from_parent) {
            if let Some(copied) = self.import_node(source, child) {
                self.append(into, copied);
            }
        }
    }

    fn import_node(&mut self, source: &Dom, id: NodeId) -> Option<NodeId> {
        let node = source.get(id)?;
        let copied = match &node.data {
            NodeData::Element { name, attrs, .. } => {
                self.create_element(name.clone(), attrs.clone())
            }
            NodeData::Text(t) => self.create_text(t.clone()),
            NodeData::Comment(c) => self.create_comment(c.clone()),
            NodeData::Document | NodeData::Doctype { .. } => return None,
        };
        self.import_children(source, id, copied);
        Some(copied)
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over children of a node.
pub struct ChildrenIter<'a> {
    dom: &'a Dom,
    current: NodeId,
}

impl Iterator for ChildrenIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self.dom.get(id).map(|n| n.next_sibling).unwrap_or(NodeId::NONE);
        Some(id)
    }
}

pub struct AncestorsIter<'a> {
    dom: &'a Dom,
    current: NodeId,
}

impl Iterator for AncestorsIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self.dom.get(id).map(|n| n.parent).unwrap_or(NodeId::NONE);
        Some(id)
    }
}

pub struct DescendantsIter<'a> {
    dom: &'a Dom,
    stack: Vec<NodeId>,
}

impl Iterator for DescendantsIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let mark = self.stack.len();
        self.stack.extend(self.dom.children(id));
        self.stack[mark..].reverse();
        Some(id)
    }
}

/// Convenience accessors for element and text nodes.
impl Dom {
    /// Get element's local name (tag).
    pub fn element_name(&self, id: NodeId) -> Option<&LocalName> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { name, .. } => Some(&name.local),
            _ => None,
        })
    }

    pub fn element_namespace(&self, id: NodeId) -> Option<&Namespace> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { name, .. } => Some(&name.ns),
            _ => None,
        })
    }

    pub fn get_attr(&self, id: NodeId, attr_name: &str) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|a| a.name.local.as_ref() == attr_name)
                .map(|a| a.value.as_str()),
            _ => None,
        })
    }

    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { id, .. } => id.as_deref(),
            _ => None,
        })
    }

    pub fn element_classes(&self, id: NodeId) -> &[String] {
        static EMPTY: &[String] = &[];
        self.get(id)
            .and_then(|n| match &n.data {
                NodeData::Element { classes, .. } => Some(classes.as_slice()),
                _ => None,
            })
            .unwrap_or(EMPTY)
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, NodeData::Element { .. }))
    }

    pub fn is_text(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|n| matches!(n.data, NodeData::Text(_)))
    }

    /// Payload of a single text node.
    pub fn text_content(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Concatenated text of every text node below `id`, like `textContent`.
    pub fn deep_text(&self, id: NodeId) -> String {
        if let Some(t) = self.text_content(id) {
            return t.to_string();
        }
        self.descendants(id)
            .filter_map(|d| self.text_content(d))
            .collect()
    }

    /// Element children only.
    pub fn element_children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(parent).filter(|&c| self.is_element(c))
    }
}

/// Qualified name in the HTML namespace.
pub fn html_name(local: &str) -> QualName {
    QualName::new(None, ns!(html), LocalName::from(local))
}

fn split_classes(value: &str) -> Vec<String> {
    value.split_whitespace().map(|s| s.to_string()).collect()
}

fn extract_id_and_classes(attrs: &[Attribute]) -> (Option<String>, Vec<String>) {
    let mut id = None;
    let mut classes = Vec::new();
    for attr in attrs {
        match attr.name.local.as_ref() {
            "id" => id = Some(attr.value.clone()),
            "class" => classes = split_classes(&attr.value),
            _ => {}
        }
    }
    (id, classes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_elements() {
        let mut dom = Dom::new();

        let div = dom.create_html_element("div", vec![Attribute::new("id", "main")]);
        dom.append(dom.document(), div);

        assert_eq!(dom.element_name(div).unwrap().as_ref(), "div");
        assert_eq!(dom.element_id(div), Some("main"));
        assert_eq!(dom.get_by_id("main"), Some(div));
    }

    #[test]
    fn test_append_children() {
        let mut dom = Dom::new();

        let parent = dom.create_html_element("ul", vec![]);
        let first = dom.create_html_element("li", vec![]);
        let second = dom.create_html_element("li", vec![]);

        dom.append(dom.document(), parent);
        dom.append(parent, first);
        dom.append(parent, second);

        let children: Vec<_> = dom.children(parent).collect();
        assert_eq!(children, vec![first, second]);
    }

    #[test]
    fn test_text_merging() {
        let mut dom = Dom::new();

        let p = dom.create_html_element("p", vec![]);
        dom.append(dom.document(), p);

        dom.append_text(p, "Hello, ");
        dom.append_text(p, "World!");

        let children: Vec<_> = dom.children(p).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(dom.text_content(children[0]), Some("Hello, World!"));
    }

    #[test]
    fn test_detach_middle_child_relinks_siblings() {
        let mut dom = Dom::new();
        let ul = dom.create_html_element("ul", vec![]);
        dom.append(dom.document(), ul);
        let items: Vec<_> = (0..3)
            .map(|_| {
                let li = dom.create_html_element("li", vec![]);
                dom.append(ul, li);
                li
            })
            .collect();

        dom.detach(items[1]);

        assert_eq!(dom.children(ul).collect::<Vec<_>>(), vec![items[0], items[2]]);
        assert!(!dom.is_attached(items[1]));
        assert_eq!(dom.get(items[0]).unwrap().next_sibling, items[2]);
        assert_eq!(dom.get(items[2]).unwrap().prev_sibling, items[0]);
    }

    #[test]
    fn test_clear_children_then_reappend() {
        let mut dom = Dom::new();
        let ul = dom.create_html_element("ul", vec![]);
        dom.append(dom.document(), ul);
        for _ in 0..4 {
            let li = dom.create_html_element("li", vec![]);
            dom.append(ul, li);
        }

        assert_eq!(dom.clear_children(ul), 4);
        assert_eq!(dom.children(ul).count(), 0);

        let li = dom.create_html_element("li", vec![]);
        dom.append(ul, li);
        assert_eq!(dom.children(ul).collect::<Vec<_>>(), vec![li]);
    }

    #[test]
    fn test_get_by_id_ignores_detached_nodes() {
        let mut dom = Dom::new();
        let div = dom.create_html_element("div", vec![Attribute::new("id", "gone")]);
        dom.append(dom.document(), div);
        dom.detach(div);
        assert_eq!(dom.get_by_id("gone"), None);
    }

    #[test]
    fn test_class_edits_update_cache_and_attr() {
        let mut dom = Dom::new();
        let nav = dom.create_html_element("ul", vec![Attribute::new("class", "nav-links open")]);

        dom.remove_class(nav, "open");
        assert!(!dom.has_class(nav, "open"));
        assert_eq!(dom.get_attr(nav, "class"), Some("nav-links"));

        dom.add_class(nav, "open");
        dom.add_class(nav, "open");
        assert_eq!(dom.get_attr(nav, "class"), Some("nav-links open"));
    }

    #[test]
    fn test_descendants_in_document_order() {
        let mut dom = Dom::new();
        let a = dom.create_html_element("a", vec![]);
        let b = dom.create_html_element("b", vec![]);
        let c = dom.create_html_element("c", vec![]);
        let d = dom.create_html_element("d", vec![]);
        dom.append(dom.document(), a);
        dom.append(a, b);
        dom.append(b, c);
        dom.append(a, d);

        let order: Vec<_> = dom.descendants(dom.document()).collect();
        assert_eq!(order, vec![a, b, c, d]);
    }

    #[test]
    fn test_set_text_empty_leaves_no_children() {
        let mut dom = Dom::new();
        let p = dom.create_html_element("p", vec![]);
        dom.append_text(p, "old");
        dom.set_text(p, "");
        assert_eq!(dom.children(p).count(), 0);
        assert_eq!(dom.deep_text(p), "");
    }
}
