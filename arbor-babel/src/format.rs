//! Format trait definition
//!
//! This module defines the core Format trait that all format adapters implement.
//! The trait provides a uniform decode/encode interface between text and the [`Tree`] model.

use crate::error::FormatError;
use crate::tree::Tree;
use std::collections::HashMap;

/// Trait for interchange formats
///
/// Implementors provide bidirectional conversion between a textual document and a [`Tree`].
/// Adapters never call each other; they only meet through the tree.
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
///     fn parse(&self, source: &str) -> Result<Tree, FormatError> {
///         // Decode source into a Tree
///         todo!()
///     }
///
///     fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
///         // Encode the Tree as text
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markup", "keyvalue", "flow")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["xml"], ["yml", "yaml"])
    ///
    /// Returns a slice of lowercase file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Decode source text into a Tree
    fn parse(&self, source: &str) -> Result<Tree, FormatError>;

    /// Encode a Tree into source text
    fn serialize(&self, tree: &Tree) -> Result<String, FormatError>;

    /// Encode a Tree, optionally using extra parameters.
    ///
    /// Formats without knobs can rely on the default implementation, which delegates to
    /// [`Format::serialize`] and rejects any parameter.
    fn serialize_with_options(
        &self,
        tree: &Tree,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(tree)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
