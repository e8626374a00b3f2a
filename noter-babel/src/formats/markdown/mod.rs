//! Markdown format implementation
//!
//! This module implements Markdown export of notes and a deliberately small
//! Markdown import.
//!
//! # Element Mapping Table
//!
//! Export (document tree → Markdown):
//!
//! | Document Node | Markdown Equivalent    | Notes                                      |
//! |---------------|------------------------|--------------------------------------------|
//! | (note title)  | `# Title`              | Always the first line                      |
//! | (metadata)    | `---` front matter     | ISO-8601 timestamps, comma-joined tags     |
//! | `paragraph`   | plain line             | Inline marks are not rendered              |
//! | `heading`     | `#` repeated by level  |                                            |
//! | `bulletList`  | `- item` lines         | First text-bearing child per item          |
//! | (attachments) | `## Attachments` list  | `- [filename](path)` per attachment        |
//!
//! Import (Markdown → document tree):
//!
//! | Markdown          | Document Node | Notes                                  |
//! |-------------------|---------------|----------------------------------------|
//! | first line        | (note title)  | Leading `#` stripped, "Untitled" if empty |
//! | blank-line blocks | `paragraph`   | One text node per block                |
//!
//! # Lossy Conversions
//!
//! Both directions are intentionally minimal. Export renders only the text
//! layer of paragraphs, headings and flat bullet lists; marks, images,
//! tables, blockquotes and nested list structure are not reproduced. Import
//! does not parse inline or block Markdown syntax beyond the title line.
//! Notes survive the trip as readable text, not as equivalent structure.

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::{ExportOptions, Format, ImportOptions, ImportedNote, NoteExport};

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown flat-text format"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_import(&self) -> bool {
        true
    }

    fn supports_export(&self) -> bool {
        true
    }

    fn import(&self, source: &str, _options: &ImportOptions) -> Result<ImportedNote, FormatError> {
        parser::validate(source)?;
        Ok(parser::parse_note(source))
    }

    fn export(&self, note: &NoteExport, options: &ExportOptions) -> Result<String, FormatError> {
        Ok(serializer::serialize_note(note, options))
    }
}
