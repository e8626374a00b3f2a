//! Image resolution tests for the Note Station format
//!
//! Images resolve through the caller's reference map first, fall back to the
//! literal src attribute, and disappear entirely when neither yields a
//! usable URL or when the source is the upload placeholder.

use noter_babel::doc::{ImageAttrs, LinkAttrs, Mark, Node};
use noter_babel::format::ImportOptions;
use noter_babel::import_note_station;
use serde_json::json;
use std::collections::HashMap;

fn import(markup: &str) -> Node {
    import_note_station(markup, &ImportOptions::default())
}

fn ref_map(entries: &[(&str, &str)]) -> ImportOptions {
    ImportOptions {
        image_ref_map: entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>(),
        ..Default::default()
    }
}

#[test]
fn literal_src_is_used_without_a_ref() {
    let doc = import("<img src=\"https://example.com/pic.png\" alt=\"a pic\">");
    assert_eq!(
        doc,
        Node::doc(vec![Node::Image {
            attrs: ImageAttrs {
                src: "https://example.com/pic.png".to_string(),
                alt: "a pic".to_string(),
            },
            marks: Vec::new(),
        }])
    );
}

#[test]
fn resolved_ref_takes_precedence_over_src() {
    let options = ref_map(&[("R", "https://x/real.png")]);
    let doc = import_note_station("<img ref=\"R\" src=\"fallback.png\">", &options);
    let Node::Doc { content } = &doc else {
        panic!("expected doc root");
    };
    assert_eq!(
        content[0],
        Node::Image {
            attrs: ImageAttrs {
                src: "https://x/real.png".to_string(),
                alt: String::new(),
            },
            marks: Vec::new(),
        }
    );
}

#[test]
fn unresolved_ref_falls_back_to_src() {
    let options = ref_map(&[("OTHER", "https://x/other.png")]);
    let doc = import_note_station("<img ref=\"R\" src=\"https://x/fallback.png\">", &options);
    let Node::Doc { content } = &doc else {
        panic!("expected doc root");
    };
    assert_eq!(
        content[0],
        Node::Image {
            attrs: ImageAttrs {
                src: "https://x/fallback.png".to_string(),
                alt: String::new(),
            },
            marks: Vec::new(),
        }
    );
}

#[test]
fn image_without_any_source_is_dropped() {
    let doc = import("<p>before<img ref=\"unknown\">after</p>");
    assert_eq!(
        doc,
        Node::doc(vec![Node::paragraph(vec![
            Node::text("before"),
            Node::text("after"),
        ])])
    );
}

#[test]
fn placeholder_image_is_suppressed() {
    let doc = import("<p>a<img src=\"https://host/transparent.gif\">b</p>");
    let Node::Doc { content } = &doc else {
        panic!("expected doc root");
    };
    let Node::Paragraph { content: inline } = &content[0] else {
        panic!("expected paragraph");
    };
    // The image leaves no trace, broken or otherwise.
    assert_eq!(inline.len(), 2);
    assert!(inline.iter().all(|n| matches!(n, Node::Text { .. })));
}

#[test]
fn empty_src_is_dropped() {
    let doc = import("<img src=\"\">");
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({"type": "doc", "content": [{"type": "paragraph"}]})
    );
}

#[test]
fn linked_image_carries_the_link_mark() {
    let doc = import("<a href=\"https://example.com\"><img src=\"https://x/i.png\"></a>");
    let Node::Doc { content } = &doc else {
        panic!("expected doc root");
    };
    assert_eq!(
        content[0].marks(),
        &[Mark::Link {
            attrs: LinkAttrs {
                href: "https://example.com".to_string(),
            },
        }]
    );
}

#[test]
fn image_wire_shape_has_resolved_src() {
    let options = ref_map(&[("MTczODc0", "files/imports/pic.png")]);
    let doc = import_note_station("<p><img ref=\"MTczODc0\" alt=\"chart\"></p>", &options);
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        value["content"][0]["content"][0],
        json!({
            "type": "image",
            "attrs": {"src": "files/imports/pic.png", "alt": "chart"},
        })
    );
}
