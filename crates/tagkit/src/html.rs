//! Markup parsing support.
//!
//! This module parses markup strings into the [`Node`] structure, so
//! markup produced elsewhere (or by a [`MarkupBuilder`](crate::MarkupBuilder))
//! can be passed to a node builder as a structured child.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse a markup fragment into a document fragment node.
///
/// The fragment's children are the top-level nodes of `markup`; comments
/// and processing instructions are dropped.
///
/// # Example
///
/// ```rust
/// use tagkit::{args, parse_html, Html};
///
/// let html = Html::new();
/// let list = parse_html("<li>one</li><li>two</li>");
/// let ul = html.build("ul", args![list]).unwrap();
///
/// assert_eq!(ul.element_children().count(), 2);
/// ```
pub fn parse_html(markup: &str) -> Node {
    let document = Html::parse_fragment(markup);
    let mut fragment = Node::document_fragment();
    append_children(&mut fragment, document.root_element());
    fragment
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let value = element.value();
    let mut node = Node::element_with_attrs(value.name(), value.attrs());
    append_children(&mut node, element);
    node
}

fn append_children(node: &mut Node, element: ElementRef) {
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }
}
