//! MarkupBuilder - renders builder arguments to escaped markup.
//!
//! Rendering is two-step: [`MarkupBuilder::bind`] captures the arguments
//! and returns a [`BoundMarkup`]; [`BoundMarkup::render`] produces the
//! string. A bound markup can be rendered any number of times and nested
//! inside another builder call, where it is rendered in place.

use std::fmt;
use std::sync::Arc;

use tagkit_core::{Arg, Drain, Item, MarkupParts, Options, Walk};

use crate::dom::{Document, HtmlDocument};

/// A tag name plus default arguments, producing deferred markup
pub struct MarkupBuilder<D: Document = HtmlDocument> {
    document: D,
    tag: String,
    defaults: Vec<Arg<D::Node>>,
    options: Options,
}

impl<D: Document + Clone> MarkupBuilder<D> {
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

    /// Capture the defaults followed by `args` for later rendering.
    ///
    /// Arguments are flattened here, once, so the bound list is shallow.
    pub fn bind<I>(&self, args: I) -> BoundMarkup<D>
    where
        I: IntoIterator<Item = Arg<D::Node>>,
    {
        BoundMarkup {
            document: self.document.clone(),
            tag: self.tag.clone(),
            args: Drain::with_defaults(&self.defaults, args)
                .map(Arg::from)
                .collect(),
            options: self.options.clone(),
        }
    }

    /// Bind and render in one go
    pub fn render<I>(&self, args: I) -> String
    where
        I: IntoIterator<Item = Arg<D::Node>>,
    {
        self.bind(args).render()
    }
}

impl<D: Document + Clone> Clone for MarkupBuilder<D> {
    fn clone(&self) -> Self {
        Self {
            document: self.document.clone(),
            tag: self.tag.clone(),
            defaults: self.defaults.clone(),
            options: self.options.clone(),
        }
    }
}

impl<D: Document> fmt::Debug for MarkupBuilder<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkupBuilder")
            .field("tag", &self.tag)
            .field("defaults", &self.defaults)
            .field("options", &self.options)
            .finish()
    }
}

/// Arguments bound to a tag, rendered on demand
pub struct BoundMarkup<D: Document = HtmlDocument> {
    document: D,
    tag: String,
    args: Vec<Arg<D::Node>>,
    options: Options,
}

impl<D: Document> BoundMarkup<D> {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Render `<tag attrs>contents</tag\n>`.
    ///
    /// Every call walks the bound arguments without consuming them, so
    /// repeated renders give the same string.
    pub fn render(&self) -> String {
        tracing::debug!(tag = %self.tag, args = self.args.len(), "rendering markup");

        let mut parts = MarkupParts::new();
        for item in Walk::new(&self.args) {
            match item {
                Item::Text(text) => parts.push_text(&text),
                Item::Number(number) => parts.push_raw(&number.to_string()),
                Item::Lazy(content) => parts.push_raw(&content()),
                Item::Node(node) => parts.push_raw(&self.document.outer_html(node)),
                Item::Attrs(attrs) => parts.push_attrs(&attrs),
                Item::Display(value) => parts.push_text(&value.to_string()),
            }
        }
        parts.finish(&self.tag, &self.options)
    }

    /// Wrap this markup as a deferred argument for any builder
    pub fn into_arg<N>(self) -> Arg<N>
    where
        D: Send + Sync + 'static,
        D::Node: Send + Sync + 'static,
    {
        let bound = Arc::new(self);
        Arg::lazy(move || bound.render())
    }
}

impl<D: Document + Clone> Clone for BoundMarkup<D> {
    fn clone(&self) -> Self {
        Self {
            document: self.document.clone(),
            tag: self.tag.clone(),
            args: self.args.clone(),
            options: self.options.clone(),
        }
    }
}

impl<D: Document> fmt::Debug for BoundMarkup<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundMarkup")
            .field("tag", &self.tag)
            .field("args", &self.args)
            .finish()
    }
}

impl<D: Document> fmt::Display for BoundMarkup<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<D> From<BoundMarkup<D>> for Arg<D::Node>
where
    D: Document + Send + Sync + 'static,
    D::Node: Send + Sync + 'static,
{
    fn from(bound: BoundMarkup<D>) -> Self {
        bound.into_arg()
    }
}
