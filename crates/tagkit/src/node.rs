//! In-memory DOM node structure.
//!
//! This module provides the node tree produced by [`HtmlDocument`](crate::HtmlDocument)
//! and its HTML fragment serialization.

use indexmap::IndexMap;
use tagkit_core::Arg;

use crate::presets::{is_raw_text, is_void};

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Document fragment node (nodeType = 11)
    DocumentFragment = 11,
}

/// A DOM node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Node type (1 = Element, 3 = Text, 11 = DocumentFragment)
    pub node_type: NodeType,

    /// Node name (uppercase for elements, e.g., "DIV", "#text" for text nodes)
    pub node_name: String,

    /// Text content for text nodes
    pub node_value: Option<String>,

    /// Attributes in insertion order, names ASCII-lowercased
    /// Only present for element nodes
    pub attributes: Option<IndexMap<String, String>>,

    /// Child nodes
    pub children: Option<Vec<Node>>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            node_name: tag_name.to_ascii_uppercase(),
            node_value: None,
            attributes: Some(IndexMap::new()),
            children: Some(Vec::new()),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs<'a, I>(tag_name: &str, attrs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut node = Self::element(tag_name);
        for (name, value) in attrs {
            node.set_attr(name, value);
        }
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            node_name: "#text".to_string(),
            node_value: Some(content.to_string()),
            attributes: None,
            children: None,
        }
    }

    /// Create a document fragment node
    pub fn document_fragment() -> Self {
        Self {
            node_type: NodeType::DocumentFragment,
            node_name: "#document-fragment".to_string(),
            node_value: None,
            attributes: None,
            children: Some(Vec::new()),
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    pub fn is_fragment(&self) -> bool {
        self.node_type == NodeType::DocumentFragment
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> String {
        self.node_name.to_ascii_lowercase()
    }

    /// Get an attribute value by name (ASCII case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .as_ref()?
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Iterate over `(name, value)` pairs in insertion order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .flat_map(|attrs| attrs.iter())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Raw style text
    pub fn style(&self) -> Option<&str> {
        self.attr("style")
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().flat_map(|c| c.iter())
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Add a child node.
    ///
    /// A fragment contributes its children instead of itself. Text nodes
    /// never take children; use [`Document::append_child`](crate::Document::append_child)
    /// for the checked version.
    pub fn add_child(&mut self, child: Node) {
        let children = self.children.get_or_insert_with(Vec::new);
        if child.is_fragment() {
            children.extend(child.children.unwrap_or_default());
        } else {
            children.push(child);
        }
    }

    /// Set an attribute, overwriting any previous value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes
            .get_or_insert_with(IndexMap::new)
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text => self.node_value.clone().unwrap_or_default(),
            _ => self.children().map(|child| child.text_content()).collect(),
        }
    }

    /// Serialize this node and its subtree
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out, false);
        out
    }

    /// Serialize the children of this node
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        self.write_children(&mut out);
        out
    }

    fn write_html(&self, out: &mut String, in_raw_text: bool) {
        match self.node_type {
            NodeType::Text => {
                let text = self.node_value.as_deref().unwrap_or("");
                if in_raw_text {
                    out.push_str(text);
                } else {
                    escape_text(text, out);
                }
            }
            NodeType::Element => {
                let tag = self.tag_name();
                out.push('<');
                out.push_str(&tag);
                for (name, value) in self.attributes() {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_attr(value, out);
                    out.push('"');
                }
                out.push('>');

                if is_void(&tag) {
                    return;
                }

                self.write_children(out);
                out.push_str("</");
                out.push_str(&tag);
                out.push('>');
            }
            NodeType::DocumentFragment => self.write_children(out),
        }
    }

    fn write_children(&self, out: &mut String) {
        let raw = self.is_element() && is_raw_text(&self.tag_name());
        for child in self.children() {
            child.write_html(out, raw);
        }
    }
}

impl From<Node> for Arg<Node> {
    fn from(node: Node) -> Self {
        Arg::Node(node)
    }
}

/// Escape text content for HTML serialization
fn escape_text(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

/// Escape HTML attribute value
fn escape_attr(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}
