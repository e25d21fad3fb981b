//! String assembly for the markup construction mode.

use crate::arg::{AttrValue, Attrs};
use crate::escape::escape_into;
use crate::options::Options;

/// Attribute and content fragments collected while draining a markup call
#[derive(Debug, Clone, Default)]
pub struct MarkupParts {
    attrs: String,
    contents: String,
}

impl MarkupParts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one attribute entry.
    ///
    /// Text and numbers render as ` name="value"`, `true` as a bare
    /// ` name`. `false` and null are left out.
    pub fn push_attr(&mut self, name: &str, value: &AttrValue) {
        match value {
            AttrValue::Text(s) => self.push_pair(name, s),
            AttrValue::Number(n) => self.push_pair(name, &n.to_string()),
            AttrValue::Bool(true) => {
                self.attrs.push(' ');
                escape_into(name, &mut self.attrs);
            }
            AttrValue::Bool(false) | AttrValue::Null => {
                tracing::trace!(name, "omitting attribute without markup form");
            }
        }
    }

    pub fn push_attrs(&mut self, attrs: &Attrs) {
        for (name, value) in attrs.iter() {
            self.push_attr(name, value);
        }
    }

    /// Append text content, escaped
    pub fn push_text(&mut self, text: &str) {
        escape_into(text, &mut self.contents);
    }

    /// Append pre-rendered markup verbatim
    pub fn push_raw(&mut self, markup: &str) {
        self.contents.push_str(markup);
    }

    /// Wrap the collected fragments in `tag`
    pub fn finish(self, tag: &str, options: &Options) -> String {
        let mut out =
            String::with_capacity(self.attrs.len() + self.contents.len() + tag.len() * 2 + 6);
        out.push('<');
        escape_into(tag, &mut out);
        out.push_str(&self.attrs);
        out.push('>');
        out.push_str(&self.contents);
        out.push_str("</");
        escape_into(tag, &mut out);
        if options.closing_newline {
            out.push('\n');
        }
        out.push('>');
        out
    }

    fn push_pair(&mut self, name: &str, value: &str) {
        self.attrs.push(' ');
        escape_into(name, &mut self.attrs);
        self.attrs.push_str("=\"");
        escape_into(value, &mut self.attrs);
        self.attrs.push('"');
    }
}
