//! Synology Note Station format implementation (import only)
//!
//! Note Station backups carry note bodies as HTML-flavored markup with a few
//! proprietary twists: images reference attachments through a `ref` attribute
//! rather than a URL, a `transparent.gif` placeholder stands in for images
//! that were never uploaded, and highlighting is expressed as a span
//! background color. This module converts that markup into the document tree.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` ecosystem for parsing:
//! - `html5ever`: Browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! This choice is based on:
//! - WHATWG HTML5 specification compliance
//! - Battle-tested with 12M+ downloads
//! - Active maintenance by Servo project
//! - Handles malformed HTML gracefully
//!
//! The last point is the important one here: Note Station exports are tag
//! soup, and the import contract is that conversion never fails. A browser
//! parser absorbs every recoverable error and hands us a best-effort tree.
//!
//! # Element Mapping Table
//!
//! | Markup Element     | Document Node                 | Notes                                           |
//! |--------------------|-------------------------------|-------------------------------------------------|
//! | `h1`..`h6`         | `heading` (level attr)        | Empty heading gets a single empty text child    |
//! | `p`, `div`         | `paragraph`                   | Empty paragraphs are dropped                    |
//! | `br`               | `hardBreak`                   |                                                 |
//! | `ul` / `ol`        | `bulletList` / `orderedList`  | Non-`li` children ignored; empty lists omitted  |
//! | `li`               | `listItem`                    | Bare inline content wrapped in a paragraph      |
//! | `blockquote`       | `blockquote`                  | Empty blockquote gets one empty paragraph       |
//! | `pre`              | `codeBlock`                   | One text node with the literal text content     |
//! | `code`             | text with `code` mark         | Inline path, no nested mark processing          |
//! | `a`                | `link` mark on children       | Applies to images too                           |
//! | `img`              | `image`                       | `ref` resolved through the reference map        |
//! | `strong`/`b`       | `bold` mark                   |                                                 |
//! | `em`/`i`           | `italic` mark                 |                                                 |
//! | `s`/`strike`/`del` | `strike` mark                 |                                                 |
//! | `u`                | (unwrapped)                   | No underline mark in the document model         |
//! | `span`             | `highlight` mark or unwrapped | Only non-transparent background-color counts    |
//! | `table`            | `table`                       | `thead` rows become `tableHeader` cells         |
//! | `hr`               | `horizontalRule`              |                                                 |
//! | anything else      | (unwrapped or dropped)        | Controlled by `fallback_to_paragraph`           |
//!
//! # Lossy Conversions
//!
//! - Underline has no counterpart in the document model and is dropped.
//! - Span styles other than background-color (colors, fonts, decorations)
//!   are not reproduced.
//! - Images that resolve to nothing (no ref match, no usable src, or the
//!   placeholder) are omitted rather than emitted broken.

pub mod parser;

pub use parser::{clean_markup, import_document};

use crate::error::FormatError;
use crate::format::{Format, ImportOptions, ImportedNote};

/// Format implementation for Synology Note Station HTML
pub struct NoteStationFormat;

impl Format for NoteStationFormat {
    fn name(&self) -> &str {
        "notestation"
    }

    fn description(&self) -> &str {
        "Synology Note Station HTML markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_import(&self) -> bool {
        true
    }

    fn import(&self, source: &str, options: &ImportOptions) -> Result<ImportedNote, FormatError> {
        // The note title lives in the backup's metadata, not in the markup,
        // so the caller supplies it.
        Ok(ImportedNote {
            title: None,
            content: parser::import_document(source, options),
        })
    }
}
