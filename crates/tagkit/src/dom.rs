//! The document model seam.
//!
//! Builders never touch nodes directly; every creation, attribute write
//! and insertion goes through a [`Document`]. Failures reported by the
//! model propagate to the builder's caller unchanged.

use std::fmt;

use crate::node::Node;
use crate::{BuildError, Result};

/// Capabilities a structured-document model offers to the builders
pub trait Document {
    /// Node handle produced by this model
    type Node: Clone + fmt::Debug;

    /// Create an element node for `tag`
    fn create_element(&self, tag: &str) -> Self::Node;

    /// Create a text node holding `text`
    fn create_text_node(&self, text: &str) -> Self::Node;

    /// Replace the node's raw style text
    fn set_style_text(&self, node: &mut Self::Node, css: &str) -> Result<()>;

    /// Generic attribute write
    fn set_attribute(&self, node: &mut Self::Node, name: &str, value: &str) -> Result<()>;

    /// Append `child` as the last child of `parent`
    fn append_child(&self, parent: &mut Self::Node, child: Self::Node) -> Result<()>;

    /// Full markup of `node`.
    ///
    /// Implementations host the node in a disposable container and read
    /// back the container's inner markup.
    fn outer_html(&self, node: Self::Node) -> String;
}

/// Document model backed by in-memory [`Node`] trees
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlDocument;

impl HtmlDocument {
    pub fn new() -> Self {
        Self
    }
}

impl Document for HtmlDocument {
    type Node = Node;

    fn create_element(&self, tag: &str) -> Node {
        Node::element(tag)
    }

    fn create_text_node(&self, text: &str) -> Node {
        Node::text(text)
    }

    fn set_style_text(&self, node: &mut Node, css: &str) -> Result<()> {
        self.set_attribute(node, "style", css)
    }

    fn set_attribute(&self, node: &mut Node, name: &str, value: &str) -> Result<()> {
        if !is_valid_attribute_name(name) {
            return Err(BuildError::InvalidCharacter(name.to_string()));
        }
        if !node.is_element() {
            return Err(BuildError::NotAnElement {
                name: name.to_string(),
                node: node.node_name.clone(),
            });
        }
        node.set_attr(name, value);
        Ok(())
    }

    fn append_child(&self, parent: &mut Node, child: Node) -> Result<()> {
        if parent.is_text() {
            return Err(BuildError::HierarchyRequest {
                parent: parent.node_name.clone(),
            });
        }
        parent.add_child(child);
        Ok(())
    }

    fn outer_html(&self, node: Node) -> String {
        let mut container = self.create_element("div");
        container.add_child(node);
        container.inner_html()
    }
}

/// Attribute names the in-memory model accepts
fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '=')
        })
}
