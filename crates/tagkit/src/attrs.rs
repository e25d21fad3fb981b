//! Attribute application for live nodes.

use once_cell::sync::Lazy;
use regex::Regex;
use tagkit_core::{Attrs, Options};

use crate::dom::Document;
use crate::Result;

/// Keys whose generic setter is unreliable; written under the camel-cased property name
static SPAN_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(col|row)span").expect("span key pattern is valid"));

/// Apply an attribute mapping to `node`, entry by entry in insertion order.
///
/// - `style` replaces the raw style text.
/// - `class` is written under `class` and, with
///   [`Options::class_name_alias`], also under `className`.
/// - keys matching `(col|row)span` in any case are written as `colSpan` / `rowSpan`.
/// - everything else goes through the generic setter.
///
/// Values are written raw. Null values are skipped. The first failing
/// write stops the loop and its error is returned.
pub fn apply_attrs<D: Document>(
    document: &D,
    node: &mut D::Node,
    attrs: &Attrs,
    options: &Options,
) -> Result<()> {
    for (name, value) in attrs.iter() {
        let Some(value) = value.to_raw() else {
            tracing::trace!(name, "skipping null attribute");
            continue;
        };

        if name == "style" {
            document.set_style_text(node, &value)?;
        } else if name == "class" {
            document.set_attribute(node, "class", &value)?;
            if options.class_name_alias {
                document.set_attribute(node, "className", &value)?;
            }
        } else if let Some(caps) = SPAN_KEY.captures(name) {
            let property = format!("{}Span", caps[1].to_ascii_lowercase());
            tracing::trace!(name, property = %property, "rewriting span attribute");
            document.set_attribute(node, &property, &value)?;
        } else {
            document.set_attribute(node, name, &value)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BuildError, HtmlDocument};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::cell::RefCell;
    use tagkit_core::attrs;

    /// Records every write instead of storing it
    #[derive(Default)]
    struct Recorder {
        writes: RefCell<Vec<(String, String)>>,
    }

    impl Document for Recorder {
        type Node = ();

        fn create_element(&self, _tag: &str) -> Self::Node {}

        fn create_text_node(&self, _text: &str) -> Self::Node {}

        fn set_style_text(&self, _node: &mut (), css: &str) -> Result<()> {
            self.writes
                .borrow_mut()
                .push(("<style>".to_string(), css.to_string()));
            Ok(())
        }

        fn set_attribute(&self, _node: &mut (), name: &str, value: &str) -> Result<()> {
            self.writes
                .borrow_mut()
                .push((name.to_string(), value.to_string()));
            Ok(())
        }

        fn append_child(&self, _parent: &mut (), _child: ()) -> Result<()> {
            Ok(())
        }

        fn outer_html(&self, _node: ()) -> String {
            String::new()
        }
    }

    fn writes(attrs: &Attrs, options: &Options) -> Vec<(String, String)> {
        let recorder = Recorder::default();
        apply_attrs(&recorder, &mut (), attrs, options).unwrap();
        recorder.writes.into_inner()
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_class_sets_both_names() {
        let result = writes(&attrs! { "class" => "x y" }, &Options::default());
        assert_eq!(result, pairs(&[("class", "x y"), ("className", "x y")]));
    }

    #[test]
    fn test_class_alias_can_be_disabled() {
        let options = Options {
            class_name_alias: false,
            ..Default::default()
        };
        let result = writes(&attrs! { "class" => "x" }, &options);
        assert_eq!(result, pairs(&[("class", "x")]));
    }

    #[test]
    fn test_style_goes_to_style_text() {
        let result = writes(&attrs! { "style" => "color: red" }, &Options::default());
        assert_eq!(result, pairs(&[("<style>", "color: red")]));
    }

    #[rstest]
    #[case("colspan", "colSpan")]
    #[case("COLSPAN", "colSpan")]
    #[case("rowSpan", "rowSpan")]
    #[case("RowSpan", "rowSpan")]
    fn test_span_keys_are_rewritten(#[case] key: &str, #[case] property: &str) {
        let result = writes(&attrs! { key => 2 }, &Options::default());
        assert_eq!(result, pairs(&[(property, "2")]));
    }

    #[test]
    fn test_other_keys_are_raw_and_ordered() {
        let attrs = attrs! {
            "href" => "a&b",
            "width" => 100,
            "checked" => true,
            "title" => None::<&str>,
        };
        let result = writes(&attrs, &Options::default());
        assert_eq!(
            result,
            pairs(&[("href", "a&b"), ("width", "100"), ("checked", "true")])
        );
    }

    #[test]
    fn test_failure_propagates() {
        let doc = HtmlDocument;
        let mut node = doc.create_element("div");
        let attrs = attrs! { "id" => "ok", "bad name" => "x", "later" => "y" };

        let err = apply_attrs(&doc, &mut node, &attrs, &Options::default()).unwrap_err();
        assert!(matches!(err, BuildError::InvalidCharacter(ref name) if name == "bad name"));
        assert_eq!(node.attr("id"), Some("ok"));
        assert!(!node.has_attr("later"));
    }
}
