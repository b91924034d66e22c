//! Flow (YAML) format implementation
//!
//! Structurally the same shape as the key/value format: YAML mappings, sequences and scalars
//! map one-to-one onto the tree, and mapping order is kept in both directions.
//!
//! Output is block style: nested collections are written as indented blocks and long scalars
//! are not folded, so a YAML rendering diffs line-for-line against the JSON one. The empty
//! scalar is written as an explicit `null`, which reads back as `""`.

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::{ScalarTyping, Tree, TypedTree};

const NAME: &str = "flow";

/// Format implementation for YAML
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowFormat;

impl Format for FlowFormat {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "YAML in block style"
    }

    fn file_extensions(&self) -> &[&str] {
        &["yml", "yaml"]
    }

    fn parse(&self, source: &str) -> Result<Tree, FormatError> {
        if is_blank_document(source) {
            return Ok(Tree::default());
        }
        serde_yaml::from_str(source)
            .map_err(|e| FormatError::decode(NAME, format!("YAML parsing error: {e}")))
    }

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
        serde_yaml::to_string(&TypedTree::new(tree, ScalarTyping::Flow))
            .map_err(|e| FormatError::encode(NAME, e))
    }
}

/// A stream with nothing but whitespace, comments and document markers holds a null.
fn is_blank_document(source: &str) -> bool {
    source.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}
