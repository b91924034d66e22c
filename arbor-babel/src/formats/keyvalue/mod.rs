//! Key/value (JSON) format implementation
//!
//! JSON already distinguishes objects, arrays and scalars, so the mapping onto the tree is
//! direct. Decoding goes through the tree's own `Deserialize` impl, which visits object
//! members in source order; encoding hands a [`TypedTree`] to `serde_json` so members are
//! written in tree order and never sorted.
//!
//! Scalars use strict typing on output: canonical integers, floats and `true`/`false` are
//! written as JSON numbers and booleans, everything else as strings. The empty scalar is
//! written as `""` rather than `null`.

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::{ScalarTyping, Tree, TypedTree};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::HashMap;

const NAME: &str = "keyvalue";

/// Format implementation for JSON
#[derive(Debug, Clone)]
pub struct KeyValueFormat {
    /// Spaces per nesting level; `0` writes compact single-line JSON
    indent: usize,
}

impl KeyValueFormat {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    fn write(&self, tree: &Tree, indent: usize) -> Result<String, FormatError> {
        let typed = TypedTree::new(tree, ScalarTyping::Strict);
        let mut buffer = Vec::new();

        if indent == 0 {
            let mut serializer = Serializer::new(&mut buffer);
            typed
                .serialize(&mut serializer)
                .map_err(|e| FormatError::encode(NAME, e))?;
        } else {
            let indent = " ".repeat(indent);
            let formatter = PrettyFormatter::with_indent(indent.as_bytes());
            let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
            typed
                .serialize(&mut serializer)
                .map_err(|e| FormatError::encode(NAME, e))?;
        }

        let mut text = String::from_utf8(buffer).map_err(|e| FormatError::encode(NAME, e))?;
        text.push('\n');
        Ok(text)
    }
}

impl Default for KeyValueFormat {
    fn default() -> Self {
        Self::new(4)
    }
}

impl Format for KeyValueFormat {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "JSON with natively typed numbers and booleans"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn parse(&self, source: &str) -> Result<Tree, FormatError> {
        serde_json::from_str(source)
            .map_err(|e| FormatError::decode(NAME, format!("JSON parsing error: {e}")))
    }

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
        self.write(tree, self.indent)
    }

    fn serialize_with_options(
        &self,
        tree: &Tree,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut indent = self.indent;
        for (key, value) in options {
            match key.as_str() {
                "indent" => {
                    indent = value.parse().map_err(|_| {
                        FormatError::NotSupported(format!(
                            "Invalid indent '{value}' for format '{NAME}'"
                        ))
                    })?;
                }
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format '{NAME}' does not support option '{other}'"
                    )))
                }
            }
        }
        self.write(tree, indent)
    }
}
