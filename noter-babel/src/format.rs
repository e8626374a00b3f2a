//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations
//! must implement, plus the exchange types that cross the format boundary:
//! the imported note, the note being exported, and the per-direction options.

use crate::doc::Node;
use crate::error::FormatError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The result of importing a source document.
///
/// Formats that can recover a title from the source (e.g. a Markdown H1) set
/// it here; formats that only carry body markup leave it empty and the caller
/// supplies the title from its own metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportedNote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: Node,
}

/// A note to be exported, with the metadata the output formats render.
///
/// Derives serde with camelCase keys so stored notes load directly from the
/// JSON the persistence layer keeps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteExport {
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    pub content: Node,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

/// A file attached to a note, referenced from export output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: String,
    pub path: String,
}

/// Options for the import direction.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Mapping from a source attachment reference token to the resolved URL
    /// the importing application uploaded the attachment to. Image elements
    /// whose reference resolves here take precedence over their literal
    /// `src` attribute.
    pub image_ref_map: HashMap<String, String>,
    /// When true (the default), unrecognized markup elements are treated as
    /// transparent wrappers and their children are spliced into place.
    /// When false they are dropped with their whole subtree.
    pub fallback_to_paragraph: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            image_ref_map: HashMap::new(),
            fallback_to_paragraph: true,
        }
    }
}

/// Options for the export direction.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Emit a front-matter block with timestamps and tags.
    pub include_metadata: bool,
    /// Emit an attachments section listing attached files.
    pub include_attachments: bool,
    /// Prefix archive entry paths with the note's folder name.
    pub preserve_structure: bool,
}

/// Trait for note document formats
///
/// Implementors provide conversion between an external representation and
/// the document tree. Formats can support import, export, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_import(&self) -> bool {
///         true
///     }
///
///     fn import(&self, source: &str, options: &ImportOptions) -> Result<ImportedNote, FormatError> {
///         // Parse source into a document tree
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "notestation", "markdown")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports import (source → document tree)
    fn supports_import(&self) -> bool {
        false
    }

    /// Whether this format supports export (note → flat text)
    fn supports_export(&self) -> bool {
        false
    }

    /// Import source text into a note
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support import should override this method.
    fn import(
        &self,
        _source: &str,
        _options: &ImportOptions,
    ) -> Result<ImportedNote, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support import",
            self.name()
        )))
    }

    /// Export a note into flat text
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support export should override this method.
    fn export(&self, _note: &NoteExport, _options: &ExportOptions) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support export",
            self.name()
        )))
    }
}
