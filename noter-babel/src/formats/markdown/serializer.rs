//! Markdown serialization (note → Markdown export)
//!
//! Produces the downloadable text form of a note: title heading, optional
//! front-matter block, the body walk, optional attachments section. The body
//! walk renders the text layer only; this exporter exists so notes leave the
//! system readable, not to round-trip the full tree.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::doc::Node;
use crate::format::{ExportOptions, NoteExport};

/// Delimiter line for the front-matter metadata block.
const METADATA_DELIMITER: &str = "---";

/// Serialize a note to Markdown.
///
/// A malformed tree is treated as empty rather than rejected: export mirrors
/// the import side's refusal to fail on bad input.
pub fn serialize_note(note: &NoteExport, options: &ExportOptions) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", note.title));

    if options.include_metadata {
        out.push_str(METADATA_DELIMITER);
        out.push('\n');
        out.push_str(&format!("created: {}\n", iso_timestamp(&note.created_at)));
        out.push_str(&format!("updated: {}\n", iso_timestamp(&note.updated_at)));
        if !note.tags.is_empty() {
            out.push_str(&format!("tags: {}\n", note.tags.join(", ")));
        }
        out.push_str(METADATA_DELIMITER);
        out.push_str("\n\n");
    }

    out.push_str(&document_body(&note.content));

    if options.include_attachments && !note.attachments.is_empty() {
        out.push_str("\n\n## Attachments\n\n");
        for attachment in &note.attachments {
            out.push_str(&format!(
                "- [{}]({})\n",
                attachment.filename, attachment.path
            ));
        }
    }

    out.trim_end().to_string()
}

/// Millisecond-precision UTC timestamp with a `Z` suffix, the shape the rest
/// of the system stores.
fn iso_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Walk the top level of the document, rendering paragraphs, headings and
/// flat bullet lists. Other node types are skipped.
fn document_body(doc: &Node) -> String {
    let content = match doc {
        Node::Doc { content } => content.as_slice(),
        // Not a document root: nothing to render.
        _ => &[],
    };

    let mut out = String::new();
    for node in content {
        match node {
            Node::Paragraph { content } => {
                out.push_str(&inline_text(content));
                out.push_str("\n\n");
            }
            Node::Heading { attrs, content } => {
                out.push_str(&"#".repeat(attrs.level.max(1) as usize));
                out.push(' ');
                out.push_str(&inline_text(content));
                out.push_str("\n\n");
            }
            Node::BulletList { content } => {
                for item in content {
                    out.push_str(&format!("- {}\n", list_item_text(item)));
                }
                out.push('\n');
            }
            _ => {}
        }
    }

    out.trim().to_string()
}

/// The text of a list item's first child. Nested structure beyond that is
/// not reproduced.
fn list_item_text(item: &Node) -> String {
    item.content()
        .first()
        .map(|first| inline_text(first.content()))
        .unwrap_or_default()
}

/// Concatenated text of an inline run, marks ignored.
fn inline_text(nodes: &[Node]) -> String {
    nodes
        .iter()
        .filter_map(|node| match node {
            Node::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}
