//! HTML serialization of a [`Dom`] through html5ever's serializer.

use std::io;

use html5ever::serialize::{Serialize, SerializeOpts, Serializer, TraversalScope, serialize};

use super::arena::{Dom, NodeData, NodeId};

/// A node in a [`Dom`], ready to hand to `html5ever::serialize`.
pub struct SerializableNode<'a> {
    dom: &'a Dom,
    id: NodeId,
}

impl<'a> SerializableNode<'a> {
    pub fn new(dom: &'a Dom, id: NodeId) -> Self {
        Self { dom, id }
    }
}

impl Serialize for SerializableNode<'_> {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        match traversal_scope {
            TraversalScope::IncludeNode => write_node(self.dom, self.id, serializer),
            TraversalScope::ChildrenOnly(_) => {
                for child in self.dom.children(self.id) {
                    write_node(self.dom, child, serializer)?;
                }
                Ok(())
            }
        }
    }
}

fn write_node<S: Serializer>(dom: &Dom, id: NodeId, serializer: &mut S) -> io::Result<()> {
    let Some(node) = dom.get(id) else {
        return Ok(());
    };

    match &node.data {
        NodeData::Document => {
            for child in dom.children(id) {
                write_node(dom, child, serializer)?;
            }
            Ok(())
        }
        NodeData::Element { name, attrs, .. } => {
            serializer.start_elem(
                name.clone(),
                attrs.iter().map(|a| (&a.name, a.value.as_str())),
            )?;
            for child in dom.children(id) {
                write_node(dom, child, serializer)?;
            }
            serializer.end_elem(name.clone())
        }
        NodeData::Text(text) => serializer.write_text(text),
        NodeData::Comment(text) => serializer.write_comment(text),
        NodeData::Doctype { name, .. } => serializer.write_doctype(name),
    }
}

/// Serialize the whole document.
pub fn to_html(dom: &Dom) -> io::Result<String> {
    serialize_with(dom, dom.document(), TraversalScope::ChildrenOnly(None))
}

/// Serialize a single node including its own tag (like `outerHTML`).
pub fn outer_html(dom: &Dom, id: NodeId) -> io::Result<String> {
    serialize_with(dom, id, TraversalScope::IncludeNode)
}

/// Serialize only the children of a node (like `innerHTML`).
pub fn inner_html(dom: &Dom, id: NodeId) -> io::Result<String> {
    serialize_with(dom, id, TraversalScope::ChildrenOnly(None))
}

fn serialize_with(dom: &Dom, id: NodeId, traversal_scope: TraversalScope) -> io::Result<String> {
    let mut bytes = Vec::new();
    let opts = SerializeOpts {
        traversal_scope,
        ..Default::default()
    };
    serialize(&mut bytes, &SerializableNode::new(dom, id), opts)?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
