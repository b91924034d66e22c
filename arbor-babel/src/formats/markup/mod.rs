//! Markup (XML) format implementation
//!
//! # Library Choice
//!
//! Parsing uses `roxmltree`: a read-only, well-formedness checking XML tree with positions in
//! its error messages. Serialization is a small pretty printer in [`serializer`]; the
//! output shape (one element per key, two-space indent) is simple enough that a writer crate
//! would add nothing.
//!
//! # Mapping Table
//!
//! | XML                                        | Tree                                  |
//! |--------------------------------------------|---------------------------------------|
//! | Document element                           | Dropped; its content is the tree      |
//! | Element without child elements             | `Scalar(text)` (empty text → `""`)    |
//! | Element with child elements                | `Mapping` keyed by child tag          |
//! | Repeated sibling tag `<k>a</k><k>b</k>`    | `k: Sequence[a, b]`                   |
//! | Single sibling tag `<k>a</k>`              | `k: a` (never a one-element sequence) |
//!
//! # Lossy Conversions
//!
//! XML cannot tell "one value" from "a list of one", so a one-element sequence comes back as a
//! bare value. Also lost on a round trip:
//! - attributes, comments, processing instructions and mixed text
//! - empty sequences (no element is written)
//! - empty mappings (written as `<k/>`, read back as `""`)
//! - nested sequences (flattened into one run of siblings)
//! - a top-level sequence (read back as `{sequence_tag: [...]}`)

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::Tree;
use std::collections::HashMap;

pub use serializer::MarkupOptions;

pub(crate) const NAME: &str = "markup";

/// Format implementation for XML
#[derive(Debug, Clone, Default)]
pub struct MarkupFormat {
    options: MarkupOptions,
}

impl MarkupFormat {
    pub fn new(options: MarkupOptions) -> Self {
        Self { options }
    }
}

impl Format for MarkupFormat {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "XML elements under a single synthetic root"
    }

    fn file_extensions(&self) -> &[&str] {
        &["xml"]
    }

    fn parse(&self, source: &str) -> Result<Tree, FormatError> {
        parser::parse_markup(source)
    }

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
        serializer::serialize_markup(tree, &self.options)
    }

    fn serialize_with_options(
        &self,
        tree: &Tree,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let options = self.options.clone().with_params(options)?;
        serializer::serialize_markup(tree, &options)
    }
}
