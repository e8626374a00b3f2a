//! Markdown parsing (Markdown → note)
//!
//! A deliberately small reader: the first line becomes the title, the rest
//! splits on blank lines into plain paragraphs. No inline syntax is parsed.

use crate::doc::Node;
use crate::error::FormatError;
use crate::format::ImportedNote;

/// Reject input that holds no content at all. Anything non-empty imports.
pub fn validate(source: &str) -> Result<(), FormatError> {
    if source.trim().is_empty() {
        return Err(FormatError::ImportError(
            "empty markdown document".to_string(),
        ));
    }
    Ok(())
}

/// Parse a Markdown document into a note.
///
/// The title is the first line with a leading `#` stripped ("Untitled" when
/// that leaves nothing). Each blank-line-separated block of the remainder
/// becomes one paragraph with a single text node; single newlines inside a
/// block are kept verbatim.
pub fn parse_note(source: &str) -> ImportedNote {
    let mut lines = source.lines();

    let first = lines.next().unwrap_or("");
    let title = first
        .strip_prefix('#')
        .unwrap_or(first)
        .trim()
        .to_string();
    let title = if title.is_empty() {
        "Untitled".to_string()
    } else {
        title
    };

    let body = lines.collect::<Vec<_>>().join("\n");
    let paragraphs: Vec<Node> = body
        .trim()
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(|block| Node::paragraph(vec![Node::text(block)]))
        .collect();

    ImportedNote {
        title: Some(title),
        content: Node::doc(paragraphs),
    }
}
