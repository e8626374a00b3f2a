//! Export tests for the Markdown format (note → Markdown)

use chrono::{TimeZone, Utc};
use insta::assert_snapshot;
use noter_babel::doc::{HeadingAttrs, Node};
use noter_babel::format::{Attachment, ExportOptions, NoteExport};
use noter_babel::export_markdown;

fn sample_note() -> NoteExport {
    NoteExport {
        title: "Meeting Notes".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 16, 8, 0, 0).unwrap(),
        tags: vec!["work".to_string(), "planning".to_string()],
        folder: None,
        content: Node::doc(vec![
            Node::paragraph(vec![Node::text("First paragraph.")]),
            Node::Heading {
                attrs: HeadingAttrs { level: 2 },
                content: vec![Node::text("Projects")],
            },
            Node::BulletList {
                content: vec![
                    Node::ListItem {
                        content: vec![Node::paragraph(vec![Node::text("alpha")])],
                    },
                    Node::ListItem {
                        content: vec![Node::paragraph(vec![Node::text("beta")])],
                    },
                ],
            },
        ]),
        attachments: vec![Attachment {
            filename: "report.pdf".to_string(),
            path: "files/report.pdf".to_string(),
        }],
    }
}

#[test]
fn export_with_metadata_and_attachments() {
    let options = ExportOptions {
        include_metadata: true,
        include_attachments: true,
        preserve_structure: false,
    };
    let markdown = export_markdown(&sample_note(), &options);

    let expected = "# Meeting Notes\n\n\
                    ---\n\
                    created: 2024-01-15T10:30:00.000Z\n\
                    updated: 2024-01-16T08:00:00.000Z\n\
                    tags: work, planning\n\
                    ---\n\n\
                    First paragraph.\n\n\
                    ## Projects\n\n\
                    - alpha\n\
                    - beta\n\n\
                    ## Attachments\n\n\
                    - [report.pdf](files/report.pdf)";
    assert_eq!(markdown, expected);
}

#[test]
fn export_without_options_is_title_and_body_only() {
    let markdown = export_markdown(&sample_note(), &ExportOptions::default());
    assert_snapshot!(markdown, @r"
    # Meeting Notes

    First paragraph.

    ## Projects

    - alpha
    - beta
    ");
}

#[test]
fn metadata_gating_never_leaks_the_delimiter() {
    let options = ExportOptions {
        include_metadata: false,
        include_attachments: true,
        preserve_structure: false,
    };
    let markdown = export_markdown(&sample_note(), &options);
    assert!(!markdown.contains("---"));
    assert!(!markdown.contains("created:"));
}

#[test]
fn empty_tag_list_omits_the_tags_line() {
    let mut note = sample_note();
    note.tags.clear();
    let options = ExportOptions {
        include_metadata: true,
        ..Default::default()
    };
    let markdown = export_markdown(&note, &options);
    assert!(markdown.contains("created:"));
    assert!(!markdown.contains("tags:"));
}

#[test]
fn attachments_section_requires_both_flag_and_files() {
    let mut note = sample_note();
    note.attachments.clear();
    let options = ExportOptions {
        include_attachments: true,
        ..Default::default()
    };
    assert!(!export_markdown(&note, &options).contains("Attachments"));

    // Flag off, files present
    assert!(!export_markdown(&sample_note(), &ExportOptions::default()).contains("Attachments"));
}

#[test]
fn heading_levels_render_as_hash_runs() {
    let note = NoteExport {
        content: Node::doc(vec![
            Node::Heading {
                attrs: HeadingAttrs { level: 1 },
                content: vec![Node::text("Top")],
            },
            Node::Heading {
                attrs: HeadingAttrs { level: 3 },
                content: vec![Node::text("Deep")],
            },
        ]),
        ..sample_note()
    };
    let markdown = export_markdown(&note, &ExportOptions::default());
    assert!(markdown.contains("\n\n# Top\n\n"));
    assert!(markdown.contains("\n\n### Deep"));
}

#[test]
fn list_items_render_first_child_text_only() {
    let note = NoteExport {
        content: Node::doc(vec![Node::BulletList {
            content: vec![Node::ListItem {
                content: vec![
                    Node::paragraph(vec![Node::text("first line")]),
                    Node::paragraph(vec![Node::text("second line never shows")]),
                ],
            }],
        }]),
        ..sample_note()
    };
    let markdown = export_markdown(&note, &ExportOptions::default());
    assert!(markdown.contains("- first line"));
    assert!(!markdown.contains("second line"));
}

#[test]
fn output_has_no_trailing_whitespace() {
    let markdown = export_markdown(&sample_note(), &ExportOptions::default());
    assert_eq!(markdown, markdown.trim_end());
}

#[test]
fn malformed_tree_exports_as_empty_body() {
    let note = NoteExport {
        content: Node::text("not a document"),
        ..sample_note()
    };
    let markdown = export_markdown(&note, &ExportOptions::default());
    assert_eq!(markdown, "# Meeting Notes");
}
