//! Html - the main entry point holding one builder per tag in each mode.

use indexmap::IndexMap;
use tagkit_core::{Arg, Options};

use crate::dom::{Document, HtmlDocument};
use crate::element::NodeBuilder;
use crate::markup::MarkupBuilder;
use crate::presets::{is_preset, PRESET_TAGS};
use crate::{BuildError, Result};

/// Tag registry for both construction modes.
///
/// Every preset tag is registered on construction. Ad-hoc tags are
/// served by the [`element`](Html::element) and [`markup`](Html::markup)
/// factories, and entries can be replaced with [`register`](Html::register).
/// Registries are plain values: several can coexist with different
/// documents, options or defaults.
pub struct Html<D: Document = HtmlDocument> {
    document: D,
    options: Options,
    elements: IndexMap<String, NodeBuilder<D>>,
    markup: IndexMap<String, MarkupBuilder<D>>,
}

impl Html<HtmlDocument> {
    /// Create a registry over the in-memory document model
    pub fn new() -> Self {
        Self::with_document(HtmlDocument)
    }
}

impl Default for Html<HtmlDocument> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Document + Clone> Html<D> {
    /// Create a registry over `document` with default options
    pub fn with_document(document: D) -> Self {
        Self::with_options(document, Options::default())
    }

    /// Create a registry whose builders all carry `options`
    pub fn with_options(document: D, options: Options) -> Self {
        let mut html = Self {
            document,
            options,
            elements: IndexMap::with_capacity(PRESET_TAGS.len()),
            markup: IndexMap::with_capacity(PRESET_TAGS.len()),
        };
        for tag in PRESET_TAGS {
            let element = html.element(tag);
            let markup = html.markup(tag);
            html.elements.insert(tag.to_string(), element);
            html.markup.insert(tag.to_string(), markup);
        }
        tracing::debug!(tags = PRESET_TAGS.len(), "registered preset builders");
        html
    }

    /// Document every builder from this registry creates nodes in
    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Node builder factory, for any tag name
    pub fn element(&self, tag: &str) -> NodeBuilder<D> {
        NodeBuilder::new(self.document().clone(), tag).with_options(self.options().clone())
    }

    /// Markup builder factory, for any tag name
    pub fn markup(&self, tag: &str) -> MarkupBuilder<D> {
        MarkupBuilder::new(self.document().clone(), tag).with_options(self.options().clone())
    }

    /// Registered node builder for `tag`
    pub fn get(&self, tag: &str) -> Option<&NodeBuilder<D>> {
        self.elements.get(tag)
    }

    /// Registered markup builder for `tag`
    pub fn get_markup(&self, tag: &str) -> Option<&MarkupBuilder<D>> {
        self.markup.get(tag)
    }

    /// Register or replace the node builder for `tag`
    pub fn register(&mut self, tag: &str, builder: NodeBuilder<D>) -> &mut Self {
        tracing::debug!(tag, preset = is_preset(tag), "registering node builder");
        self.elements.insert(tag.to_string(), builder);
        self
    }

    /// Register or replace the markup builder for `tag`
    pub fn register_markup(&mut self, tag: &str, builder: MarkupBuilder<D>) -> &mut Self {
        tracing::debug!(tag, preset = is_preset(tag), "registering markup builder");
        self.markup.insert(tag.to_string(), builder);
        self
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// Tags with a registered node builder, in registration order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    /// Build a node with the registered builder for `tag`
    pub fn build<I>(&self, tag: &str, args: I) -> Result<D::Node>
    where
        I: IntoIterator<Item = Arg<D::Node>>,
    {
        self.get(tag)
            .ok_or_else(|| BuildError::UnregisteredTag(tag.to_string()))?
            .build(args)
    }

    /// Render markup with the registered builder for `tag`
    pub fn render<I>(&self, tag: &str, args: I) -> Result<String>
    where
        I: IntoIterator<Item = Arg<D::Node>>,
    {
        let builder = self
            .get_markup(tag)
            .ok_or_else(|| BuildError::UnregisteredTag(tag.to_string()))?;
        Ok(builder.render(args))
    }
}
