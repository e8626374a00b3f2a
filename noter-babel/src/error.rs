//! Error types for format operations

use std::fmt;

/// Errors that can occur during format operations
///
/// The NoteStation import path is deliberately error-free (malformed markup
/// degrades to a best-effort tree), so these errors only surface at the
/// registry boundary: unknown formats, unsupported directions, and formats
/// that do validate their input.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error while importing a source document
    ImportError(String),
    /// Error while exporting a note
    ExportError(String),
    /// Format does not support the requested direction
    NotSupported(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::ImportError(msg) => write!(f, "Import error: {msg}"),
            FormatError::ExportError(msg) => write!(f, "Export error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}
