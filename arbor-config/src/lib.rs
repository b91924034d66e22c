//! Shared configuration loader for the arbor toolchain.
//!
//! `defaults/arbor.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`ArborConfig`].

use arbor_babel::formats::MarkupOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError as LoadError;

const DEFAULT_TOML: &str = include_str!("../defaults/arbor.default.toml");

/// Top-level configuration consumed by arbor applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ArborConfig {
    pub markup: MarkupConfig,
    pub keyvalue: KeyValueConfig,
    pub log: LogConfig,
}

/// Mirrors the knobs exposed by the XML serializer.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkupConfig {
    pub root_tag: String,
    pub indent: String,
    pub declaration: bool,
    pub sequence_tag: String,
}

impl From<&MarkupConfig> for MarkupOptions {
    fn from(config: &MarkupConfig) -> Self {
        MarkupOptions {
            root_tag: config.root_tag.clone(),
            indent: config.indent.clone(),
            declaration: config.declaration,
            sequence_tag: config.sequence_tag.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyValueConfig {
    pub indent: usize,
}

/// Where and how verbosely the shell writes its diagnostic log.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub enabled: bool,
    pub path: String,
    pub level: String,
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
    pub fn build(self) -> Result<ArborConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ArborConfig, ConfigError> {
    Loader::new().build()
}
