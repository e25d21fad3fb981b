//! NodeBuilder - constructs live nodes from builder arguments.

use std::fmt;

use tagkit_core::{Arg, Drain, Item, Options};

use crate::attrs::apply_attrs;
use crate::dom::{Document, HtmlDocument};
use crate::Result;

/// A tag name plus default arguments, producing one node per call
pub struct NodeBuilder<D: Document = HtmlDocument> {
    document: D,
    tag: String,
    defaults: Vec<Arg<D::Node>>,
    options: Options,
}

impl<D: Document + Clone> NodeBuilder<D> {
    /// Create a builder for `tag` with no defaults
    pub fn new(document: D, tag: impl Into<String>) -> Self {
        Self {
            document,
            tag: tag.into(),
            defaults: Vec::new(),
            options: Options::default(),
        }
    }

    /// Return a builder whose defaults are extended by `defaults`.
    ///
    /// Nested lists are flattened on the way in.
    pub fn with_defaults<I>(mut self, defaults: I) -> Self
    where
        I: IntoIterator<Item = Arg<D::Node>>,
    {
        self.defaults.extend(Drain::new(defaults).map(Arg::from));
        self
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn defaults(&self) -> &[Arg<D::Node>] {
        &self.defaults
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Build one node from the defaults followed by `args`
    pub fn build<I>(&self, args: I) -> Result<D::Node>
    where
        I: IntoIterator<Item = Arg<D::Node>>,
    {
        build_element(
            &self.document,
            &self.tag,
            &self.defaults,
            args,
            &self.options,
        )
    }
}

impl<D: Document + Clone> Clone for NodeBuilder<D> {
    fn clone(&self) -> Self {
        Self {
            document: self.document.clone(),
            tag: self.tag.clone(),
            defaults: self.defaults.clone(),
            options: self.options.clone(),
        }
    }
}

impl<D: Document> fmt::Debug for NodeBuilder<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeBuilder")
            .field("tag", &self.tag)
            .field("defaults", &self.defaults)
            .field("options", &self.options)
            .finish()
    }
}

/// Create a `tag` element and drain `defaults ++ args` into it.
///
/// Text, numbers and displayable values become text children, nodes are
/// appended as they are, attribute maps go through [`apply_attrs`] and
/// lists are spliced in place. Deferred markup and absent values are
/// skipped. Errors from the document model are returned unchanged.
pub fn build_element<D, I>(
    document: &D,
    tag: &str,
    defaults: &[Arg<D::Node>],
    args: I,
    options: &Options,
) -> Result<D::Node>
where
    D: Document,
    I: IntoIterator<Item = Arg<D::Node>>,
{
    tracing::debug!(tag, defaults = defaults.len(), "building element");

    let mut node = document.create_element(tag);
    for item in Drain::with_defaults(defaults, args) {
        match item {
            Item::Text(text) => {
                let child = document.create_text_node(&text);
                document.append_child(&mut node, child)?;
            }
            Item::Number(number) => {
                let child = document.create_text_node(&number.to_string());
                document.append_child(&mut node, child)?;
            }
            Item::Node(child) => document.append_child(&mut node, child)?,
            Item::Attrs(attrs) => apply_attrs(document, &mut node, &attrs, options)?,
            Item::Display(value) => {
                let child = document.create_text_node(&value.to_string());
                document.append_child(&mut node, child)?;
            }
            Item::Lazy(_) => {
                tracing::trace!(tag, "skipping deferred markup in node mode");
            }
        }
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Node;
    use pretty_assertions::assert_eq;
    use tagkit_core::{args, attrs};

    fn builder(tag: &str) -> NodeBuilder {
        NodeBuilder::new(HtmlDocument, tag)
    }

    fn child_texts(node: &Node) -> Vec<String> {
        node.children().map(|c| c.text_content()).collect()
    }

    #[test]
    fn test_paragraph_with_class_text_and_number() {
        let p = builder("p")
            .build(args![attrs! { "class" => "x" }, "hello", 42])
            .unwrap();

        assert_eq!(p.tag_name(), "p");
        assert_eq!(p.attr("class"), Some("x"));
        assert_eq!(p.attr("className"), Some("x"));
        assert_eq!(child_texts(&p), vec!["hello", "42"]);
        assert!(p.children().all(Node::is_text));
    }

    #[test]
    fn test_lists_flatten_like_separate_arguments() {
        let nested = builder("div").build(args![["a", "b"], "c"]).unwrap();
        let flat = builder("div").build(args!["a", "b", "c"]).unwrap();
        assert_eq!(nested, flat);
        assert_eq!(child_texts(&nested), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_nodes_are_appended_as_is() {
        let em = builder("em").build(args!["x"]).unwrap();
        let p = builder("p").build(args!["a ", em.clone(), " b"]).unwrap();

        assert_eq!(p.children().nth(1), Some(&em));
        assert_eq!(p.outer_html(), "<p>a <em>x</em> b</p>");
    }

    #[test]
    fn test_attrs_anywhere_in_the_list() {
        let a = builder("a")
            .build(args!["click here", attrs! { "href" => "http://www.example.com/" }])
            .unwrap();
        assert_eq!(a.attr("href"), Some("http://www.example.com/"));
        assert_eq!(a.children().count(), 1);
    }

    #[test]
    fn test_unrecognized_arguments_are_skipped() {
        let lazy: Arg<Node> = Arg::lazy(|| "<b>no</b>".to_string());
        let div = builder("div")
            .build(vec![Arg::Absent, lazy, Arg::from(None::<&str>)])
            .unwrap();
        assert_eq!(div.children().count(), 0);
        assert_eq!(div.attributes().count(), 0);
    }

    #[test]
    fn test_display_values_become_text() {
        let div = builder("div")
            .build(vec![Arg::display(std::net::Ipv4Addr::LOCALHOST)])
            .unwrap();
        assert_eq!(div.text_content(), "127.0.0.1");
    }

    #[test]
    fn test_defaults_come_first_and_are_reused() {
        let td = builder("td").with_defaults(args![attrs! { "colspan" => 2 }, "def "]);

        let first = td.build(args!["one"]).unwrap();
        let second = td.build(args!["two"]).unwrap();

        assert_eq!(first.text_content(), "def one");
        assert_eq!(second.text_content(), "def two");
        assert_eq!(second.attr("colspan"), Some("2"));
        assert_eq!(td.defaults().len(), 2);
    }

    #[test]
    fn test_style_and_later_attrs_overwrite() {
        let div = builder("div")
            .build(args![
                attrs! { "style" => "color: red", "id" => "a" },
                attrs! { "style" => "margin: 0", "id" => "b" },
            ])
            .unwrap();
        assert_eq!(div.style(), Some("margin: 0"));
        assert_eq!(div.attr("id"), Some("b"));
    }

    #[test]
    fn test_model_errors_propagate() {
        let result = builder("div").build(args![attrs! { "" => "x" }]);
        assert!(result.is_err());
    }
}
