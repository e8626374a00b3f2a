//! Shared configuration loader for the noter format tools.
//!
//! `defaults/noter.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`NoterConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use noter_babel::format::{ExportOptions, ImportOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/noter.default.toml");

/// Top-level configuration consumed by noter applications.
#[derive(Debug, Clone, Deserialize)]
pub struct NoterConfig {
    pub import: ImportConfig,
    pub export: ExportConfig,
}

/// Mirrors the knobs exposed by the import path.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    pub fallback_to_paragraph: bool,
    pub clean_markup: bool,
}

/// Mirrors the knobs exposed by the export path.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub include_metadata: bool,
    pub include_attachments: bool,
    pub preserve_structure: bool,
}

impl From<&ImportConfig> for ImportOptions {
    fn from(config: &ImportConfig) -> Self {
        // The image reference map is per-import data, not configuration;
        // callers fill it in after building the options.
        ImportOptions {
            fallback_to_paragraph: config.fallback_to_paragraph,
            ..ImportOptions::default()
        }
    }
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        ExportOptions {
            include_metadata: config.include_metadata,
            include_attachments: config.include_attachments,
            preserve_structure: config.preserve_structure,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<NoterConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<NoterConfig, ConfigError> {
    Loader::new().build()
}
