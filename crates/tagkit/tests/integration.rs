use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tagkit::{
    args, attrs, escape, Arg, BuildError, Document, Html, HtmlDocument, MarkupBuilder, Node,
    NodeBuilder, Options, Result,
};

#[test]
fn test_paragraph_scenario() {
    let html = Html::new();
    let p = html
        .build("p", args![attrs! { "class" => "x" }, "hello", 42])
        .unwrap();

    assert_eq!(p.attr("class"), Some("x"));
    assert_eq!(p.attr("className"), Some("x"));
    let children: Vec<&Node> = p.children().collect();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0], &Node::text("hello"));
    assert_eq!(children[1], &Node::text("42"));
}

#[test]
fn test_link_scenario() {
    let html = Html::new();
    let link = html
        .render("a", args!["click here", attrs! { "href" => "http://example.com/" }])
        .unwrap();
    assert_eq!(
        link,
        "<a href=\"http:&#x2F;&#x2F;example.com&#x2F;\">click here</a\n>"
    );
}

#[test]
fn test_sequence_scenario() {
    let html = Html::new();
    assert_eq!(
        html.render("div", args![["a", "b"], "c"]).unwrap(),
        "<div>abc</div\n>"
    );
}

#[test]
fn test_nested_table() {
    let html = Html::new();
    let td = |args: Vec<Arg<Node>>| html.build("td", args).unwrap();

    let table = html
        .build(
            "table",
            args![html
                .build(
                    "tr",
                    args![
                        td(args![attrs! { "width" => 100, "colspan" => 2 }, "Hello"]),
                        td(args![html
                            .build("a", args!["click here", attrs! { "href" => "http://www.example.com/" }])
                            .unwrap()]),
                    ],
                )
                .unwrap()],
        )
        .unwrap();

    assert_eq!(
        table.outer_html(),
        "<table><tr><td width=\"100\" colspan=\"2\">Hello</td>\
         <td><a href=\"http://www.example.com/\">click here</a></td></tr></table>"
    );
}

#[test]
fn test_markup_tree_composes_lazily() {
    let html = Html::new();
    let item = html.get_markup("li").unwrap();
    let items: Vec<Arg<Node>> = ["one", "<two>"]
        .iter()
        .map(|text| item.bind(args![*text]).into())
        .collect();

    let list = html.render("ul", args![attrs! { "id" => "list" }, items]).unwrap();
    assert_eq!(
        list,
        "<ul id=\"list\"><li>one</li\n><li>&lt;two&gt;</li\n></ul\n>"
    );
}

#[test]
fn test_node_in_markup_mode() {
    let html = Html::new();
    let strong = html.build("strong", args!["a < b"]).unwrap();
    assert_eq!(
        html.render("p", args!["see: ", strong]).unwrap(),
        "<p>see: <strong>a &lt; b</strong></p\n>"
    );
}

#[rstest]
#[case(args!["a", "b", "c"])]
#[case(args![["a", "b"], "c"])]
#[case(args!["a", ["b", "c"]])]
#[case(args![["a"], [["b"]], [[["c"]]]])]
fn test_flattening_is_order_preserving(#[case] args: Vec<Arg<Node>>) {
    let html = Html::new();
    assert_eq!(html.render("p", args.clone()).unwrap(), "<p>abc</p\n>");
    assert_eq!(html.build("p", args).unwrap().text_content(), "abc");
}

#[rstest]
#[case("<")]
#[case(">")]
#[case("\"")]
#[case("'")]
#[case("/")]
#[case("&")]
fn test_reserved_characters_never_leak(#[case] reserved: &str) {
    let html = Html::new();
    let value = format!("x{reserved}y");
    let markup = html
        .render("span", args![attrs! { "title" => value.as_str() }, value.as_str()])
        .unwrap();

    let expected = format!(
        "<span title=\"{escaped}\">{escaped}</span\n>",
        escaped = escape(&value)
    );
    assert_eq!(markup, expected);
}

#[test]
fn test_absent_everywhere_is_harmless() {
    let html = Html::new();
    let none: Option<&str> = None;
    assert_eq!(html.render("p", args![none]).unwrap(), "<p></p\n>");
    assert_eq!(html.build("p", args![none]).unwrap().children().count(), 0);
}

#[test]
fn test_independent_builders_with_defaults() {
    let doc = HtmlDocument::new();
    let base = NodeBuilder::new(doc, "div");
    let card = base.clone().with_defaults(args![attrs! { "class" => "card" }]);

    assert!(!base.build(args![]).unwrap().has_attr("class"));
    assert_eq!(card.build(args![]).unwrap().attr("class"), Some("card"));

    let markup = MarkupBuilder::new(doc, "div").with_options(Options {
        closing_newline: false,
        ..Default::default()
    });
    assert_eq!(markup.render(args!["x"]), "<div>x</div>");
}

/// A document model that renders straight into strings, used to check
/// that builders only talk to the model through the trait.
#[derive(Clone, Default)]
struct Journal {
    log: Rc<RefCell<Vec<String>>>,
}

#[derive(Debug, Clone, PartialEq)]
struct Handle(String);

#[derive(Debug, thiserror::Error)]
#[error("readonly attribute {0}")]
struct Readonly(String);

impl Document for Journal {
    type Node = Handle;

    fn create_element(&self, tag: &str) -> Handle {
        self.log.borrow_mut().push(format!("create {tag}"));
        Handle(tag.to_string())
    }

    fn create_text_node(&self, text: &str) -> Handle {
        Handle(format!("#{text}"))
    }

    fn set_style_text(&self, _node: &mut Handle, css: &str) -> Result<()> {
        self.log.borrow_mut().push(format!("style {css}"));
        Ok(())
    }

    fn set_attribute(&self, _node: &mut Handle, name: &str, value: &str) -> Result<()> {
        if name == "id" {
            return Err(BuildError::Model(Box::new(Readonly(name.to_string()))));
        }
        self.log.borrow_mut().push(format!("set {name}={value}"));
        Ok(())
    }

    fn append_child(&self, _parent: &mut Handle, child: Handle) -> Result<()> {
        self.log.borrow_mut().push(format!("append {}", child.0));
        Ok(())
    }

    fn outer_html(&self, node: Handle) -> String {
        format!("[{}]", node.0)
    }
}

#[test]
fn test_custom_document_sees_calls_in_order() {
    let journal = Journal::default();
    let td = NodeBuilder::new(journal.clone(), "td");

    td.build(args![
        "a",
        attrs! { "ROWSPAN" => 3, "style" => "x", "class" => "c" },
        [1, 2],
    ])
    .unwrap();

    assert_eq!(
        *journal.log.borrow(),
        vec![
            "create td",
            "append #a",
            "set rowSpan=3",
            "style x",
            "set class=c",
            "set className=c",
            "append #1",
            "append #2",
        ]
    );
}

#[test]
fn test_custom_document_errors_pass_through() {
    let journal = Journal::default();
    let err = NodeBuilder::new(journal, "p")
        .build(args![attrs! { "id" => "main" }])
        .unwrap_err();

    assert!(matches!(err, BuildError::Model(_)));
    assert_eq!(err.to_string(), "readonly attribute id");
}

#[test]
fn test_custom_document_serializes_nodes_in_markup() {
    let journal = Journal::default();
    let markup = MarkupBuilder::new(journal, "p").render(vec![Arg::node(Handle("x".into()))]);
    assert_eq!(markup, "<p>[x]</p\n>");
}
