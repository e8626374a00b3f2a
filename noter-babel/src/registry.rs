//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name. It plays the role the
//! provider registry plays in the noter backend: callers ask for a format by
//! name (or filename) and get a capability-checked import/export surface.

use crate::error::FormatError;
use crate::format::{ExportOptions, Format, ImportOptions, ImportedNote, NoteExport};
use std::collections::HashMap;

/// Registry of note document formats
///
/// Provides a centralized registry for all available formats.
/// Formats can be registered and retrieved by name.
///
/// # Examples
///
/// ```ignore
/// let mut registry = FormatRegistry::new();
/// registry.register(MyFormat);
///
/// let format = registry.get("my-format")?;
/// let note = format.import("source text", &ImportOptions::default())?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let registry = FormatRegistry::default();
    /// assert_eq!(registry.detect_format_from_filename("note.html"), Some("notestation".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("note.md"), Some("markdown".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("note.unknown"), None);
    /// ```
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        // Extract extension from filename
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        // Search for a format that supports this extension
        for format in self.formats.values() {
            if format.file_extensions().contains(&extension) {
                return Some(format.name().to_string());
            }
        }

        None
    }

    /// Import source text using the specified format
    pub fn import(
        &self,
        source: &str,
        format: &str,
        options: &ImportOptions,
    ) -> Result<ImportedNote, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_import() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support import"
            )));
        }
        fmt.import(source, options)
    }

    /// Export a note using the specified format
    pub fn export(
        &self,
        note: &NoteExport,
        format: &str,
        options: &ExportOptions,
    ) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_export() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support export"
            )));
        }
        fmt.export(note, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        // Register built-in formats
        registry.register(crate::formats::notestation::NoteStationFormat);
        registry.register(crate::formats::markdown::MarkdownFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
