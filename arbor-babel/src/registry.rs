//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name or detected from a filename.

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::Tree;
use std::collections::HashMap;
use std::path::Path;

/// Registry of interchange formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
///
/// let tree = registry.parse("<root><a>1</a></root>", "markup")?;
/// let json = registry.serialize(&tree, "keyvalue")?;
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
            .ok_or_else(|| FormatError::UnsupportedFormat(name.to_string()))
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
    /// Extensions are matched case-insensitively (`DATA.XML` is markup). Returns `None` when
    /// the name has no extension or no registered format claims it.
    pub fn detect_format_from_filename(&self, filename: impl AsRef<Path>) -> Option<String> {
        let extension = filename
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())?
            .to_ascii_lowercase();

        self.formats
            .values()
            .find(|format| format.file_extensions().contains(&extension.as_str()))
            .map(|format| format.name().to_string())
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<Tree, FormatError> {
        self.get(format)?.parse(source)
    }

    /// Serialize a tree using the specified format
    pub fn serialize(&self, tree: &Tree, format: &str) -> Result<String, FormatError> {
        self.get(format)?.serialize(tree)
    }

    /// Serialize a tree using the specified format and options
    pub fn serialize_with_options(
        &self,
        tree: &Tree,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        self.get(format)?.serialize_with_options(tree, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::markup::MarkupFormat::default());
        registry.register(crate::formats::keyvalue::KeyValueFormat::default());
        registry.register(crate::formats::flow::FlowFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
