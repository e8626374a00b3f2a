//! Import tests for the Note Station format (markup → document tree)
//!
//! These tests verify the structural conversion rules: fallback documents,
//! paragraph elision, list and blockquote shapes, code blocks, and the
//! behavior of unknown elements. Mark handling and tables have their own
//! test modules.

use noter_babel::doc::{Mark, Node};
use noter_babel::format::ImportOptions;
use noter_babel::import_note_station;
use proptest::prelude::*;
use serde_json::json;

fn import(markup: &str) -> Node {
    import_note_station(markup, &ImportOptions::default())
}

#[test]
fn empty_input_yields_minimal_document() {
    let doc = import("");
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({"type": "doc", "content": [{"type": "paragraph"}]})
    );
}

#[test]
fn whitespace_only_input_yields_minimal_document() {
    let doc = import("   \n\t  ");
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({"type": "doc", "content": [{"type": "paragraph"}]})
    );
}

#[test]
fn simple_paragraph() {
    let doc = import("<p>Hello world</p>");
    assert_eq!(
        doc,
        Node::doc(vec![Node::paragraph(vec![Node::text("Hello world")])])
    );
}

#[test]
fn div_behaves_like_paragraph() {
    let doc = import("<div>Hello</div>");
    assert_eq!(doc, Node::doc(vec![Node::paragraph(vec![Node::text("Hello")])]));
}

#[test]
fn empty_paragraphs_are_elided() {
    let doc = import("<p></p><p>kept</p><p></p>");
    assert_eq!(doc, Node::doc(vec![Node::paragraph(vec![Node::text("kept")])]));
}

#[test]
fn headings_carry_level_attr() {
    let doc = import("<h1>One</h1><h3>Three</h3>");
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value["content"][0]["type"], json!("heading"));
    assert_eq!(value["content"][0]["attrs"]["level"], json!(1));
    assert_eq!(value["content"][1]["attrs"]["level"], json!(3));
}

#[test]
fn empty_heading_gets_empty_text_child() {
    let doc = import("<h2></h2>");
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({
            "type": "doc",
            "content": [{
                "type": "heading",
                "attrs": {"level": 2},
                "content": [{"type": "text", "text": ""}],
            }],
        })
    );
}

#[test]
fn hard_break_inside_paragraph() {
    let doc = import("<p>a<br>b</p>");
    assert_eq!(
        doc,
        Node::doc(vec![Node::paragraph(vec![
            Node::text("a"),
            Node::HardBreak,
            Node::text("b"),
        ])])
    );
}

#[test]
fn horizontal_rule() {
    let doc = import("<p>a</p><hr>");
    assert_eq!(
        doc,
        Node::doc(vec![
            Node::paragraph(vec![Node::text("a")]),
            Node::HorizontalRule,
        ])
    );
}

#[test]
fn bullet_list_wraps_plain_items_in_paragraphs() {
    let doc = import("<ul><li>one</li><li><p>two</p></li></ul>");
    assert_eq!(
        doc,
        Node::doc(vec![Node::BulletList {
            content: vec![
                Node::ListItem {
                    content: vec![Node::paragraph(vec![Node::text("one")])],
                },
                Node::ListItem {
                    content: vec![Node::paragraph(vec![Node::text("two")])],
                },
            ],
        }])
    );
}

#[test]
fn ordered_list_keeps_only_list_items() {
    let doc = import("<ol><li>one</li></ol>");
    assert_eq!(
        doc,
        Node::doc(vec![Node::OrderedList {
            content: vec![Node::ListItem {
                content: vec![Node::paragraph(vec![Node::text("one")])],
            }],
        }])
    );
}

#[test]
fn empty_list_is_omitted_entirely() {
    // An empty <ul> must not surface as a list with empty content.
    let doc = import("<ul></ul><p>after</p>");
    assert_eq!(doc, Node::doc(vec![Node::paragraph(vec![Node::text("after")])]));

    // When nothing else survives either, the document fallback kicks in.
    let doc = import("<ul></ul>");
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({"type": "doc", "content": [{"type": "paragraph"}]})
    );
}

#[test]
fn empty_list_items_are_omitted() {
    let doc = import("<ul><li></li><li>kept</li></ul>");
    let Node::Doc { content } = &doc else {
        panic!("expected doc root");
    };
    let Node::BulletList { content: items } = &content[0] else {
        panic!("expected bullet list");
    };
    assert_eq!(items.len(), 1);
}

#[test]
fn blockquote_wraps_children() {
    let doc = import("<blockquote><p>quoted</p></blockquote>");
    assert_eq!(
        doc,
        Node::doc(vec![Node::Blockquote {
            content: vec![Node::paragraph(vec![Node::text("quoted")])],
        }])
    );
}

#[test]
fn empty_blockquote_gets_empty_paragraph() {
    let doc = import("<blockquote></blockquote>");
    assert_eq!(
        doc,
        Node::doc(vec![Node::Blockquote {
            content: vec![Node::empty_paragraph()],
        }])
    );
}

#[test]
fn pre_becomes_code_block_with_literal_text() {
    let doc = import("<pre>fn main() {\n    body();\n}</pre>");
    assert_eq!(
        doc,
        Node::doc(vec![Node::CodeBlock {
            content: vec![Node::text("fn main() {\n    body();\n}")],
        }])
    );
}

#[test]
fn code_block_ignores_nested_markup() {
    // No inline mark processing inside code blocks: tags contribute only
    // their text.
    let doc = import("<pre><b>bold?</b> no</pre>");
    assert_eq!(
        doc,
        Node::doc(vec![Node::CodeBlock {
            content: vec![Node::text("bold? no")],
        }])
    );
}

#[test]
fn unknown_elements_are_unwrapped_by_default() {
    let doc = import("<article><p>inside</p></article>");
    assert_eq!(
        doc,
        Node::doc(vec![Node::paragraph(vec![Node::text("inside")])])
    );
}

#[test]
fn unknown_elements_are_dropped_when_fallback_disabled() {
    let options = ImportOptions {
        fallback_to_paragraph: false,
        ..Default::default()
    };
    let doc = import_note_station("<article><p>inside</p></article>", &options);
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({"type": "doc", "content": [{"type": "paragraph"}]})
    );
}

#[test]
fn whitespace_between_blocks_is_dropped() {
    let doc = import("<p>a</p>\n   <p>b</p>");
    assert_eq!(
        doc,
        Node::doc(vec![
            Node::paragraph(vec![Node::text("a")]),
            Node::paragraph(vec![Node::text("b")]),
        ])
    );
}

#[test]
fn interior_whitespace_in_inline_runs_is_preserved() {
    let doc = import("<p><b>a</b> <i>b</i></p>");
    let Node::Doc { content } = &doc else {
        panic!("expected doc root");
    };
    let Node::Paragraph { content: inline } = &content[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(inline.len(), 3);
    assert_eq!(inline[1], Node::text(" "));
}

#[test]
fn block_elements_in_inline_context_are_flattened() {
    // A heading cannot hold a paragraph; its inline content is spliced in.
    let doc = import("<h1><p>title text</p></h1>");
    assert_eq!(
        doc,
        Node::doc(vec![Node::Heading {
            attrs: noter_babel::doc::HeadingAttrs { level: 1 },
            content: vec![Node::text("title text")],
        }])
    );
}

#[test]
fn pathological_nesting_flattens_instead_of_overflowing() {
    let markup = format!("{}deep{}", "<div>".repeat(300), "</div>".repeat(300));
    let doc = import(&markup);
    assert_eq!(doc, Node::doc(vec![Node::paragraph(vec![Node::text("deep")])]));
}

#[test]
fn pathological_block_nesting_does_not_panic() {
    let markup = format!(
        "{}deep{}",
        "<blockquote>".repeat(300),
        "</blockquote>".repeat(300)
    );
    let doc = import(&markup);
    let Node::Doc { content } = &doc else {
        panic!("expected doc root");
    };
    assert!(!content.is_empty());
}

#[test]
fn inline_code_outside_paragraph_carries_code_mark() {
    let doc = import("<code>let x = 1;</code>");
    assert_eq!(
        doc,
        Node::doc(vec![Node::Text {
            text: "let x = 1;".to_string(),
            marks: vec![Mark::Code],
        }])
    );
}

proptest! {
    #[test]
    fn import_never_fails_on_arbitrary_text(input in "\\PC{0,300}") {
        let doc = import(&input);
        prop_assert!(matches!(doc, Node::Doc { ref content } if !content.is_empty()), "expected non-empty doc");
    }

    #[test]
    fn import_never_fails_on_tag_soup(
        parts in proptest::collection::vec(
            proptest::sample::select(vec![
                "<p>", "</p>", "<b>", "</i>", "<ul>", "<li>", "</table>",
                "<table>", "<tr>", "<td>", "<blockquote>", "<h2>", "text ",
                "<img src=\"x.png\">", "&amp;", "<br>",
                "<span style=\"background-color: red\">", "</span>",
            ]),
            0..40,
        )
    ) {
        let input: String = parts.concat();
        let doc = import(&input);
        prop_assert!(matches!(doc, Node::Doc { ref content } if !content.is_empty()), "expected non-empty doc");
    }
}
