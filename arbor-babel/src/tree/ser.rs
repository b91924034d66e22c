//! Serde encoding of the tree model
//!
//! Scalars are text in the tree, but JSON and YAML have native numbers and booleans. A scalar
//! is handed to the writer as a native value only when the writer's output decodes back to the
//! exact same text; everything else is written as a string. Mappings are emitted entry by
//! entry in stored order, so writers never see a sorted map.

use super::Tree;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// How scalars are typed when a tree is handed to a serde writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalarTyping {
    /// Booleans and numbers are typed natively; the empty scalar is an empty string.
    #[default]
    Strict,
    /// Like `Strict`, but the empty scalar is written as an explicit null.
    Flow,
}

/// A tree paired with the scalar typing rules of the target writer.
#[derive(Debug, Clone, Copy)]
pub struct TypedTree<'a> {
    tree: &'a Tree,
    typing: ScalarTyping,
}

impl<'a> TypedTree<'a> {
    pub fn new(tree: &'a Tree, typing: ScalarTyping) -> Self {
        Self { tree, typing }
    }

    fn child(&self, tree: &'a Tree) -> Self {
        Self::new(tree, self.typing)
    }
}

impl Serialize for TypedTree<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.tree {
            Tree::Scalar(text) => match NativeScalar::classify(text, self.typing) {
                NativeScalar::Null => serializer.serialize_unit(),
                NativeScalar::Bool(value) => serializer.serialize_bool(value),
                NativeScalar::Signed(value) => serializer.serialize_i64(value),
                NativeScalar::Unsigned(value) => serializer.serialize_u64(value),
                NativeScalar::Float(value) => serializer.serialize_f64(value),
                NativeScalar::Text(text) => serializer.serialize_str(text),
            },
            Tree::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&self.child(item))?;
                }
                seq.end()
            }
            Tree::Mapping(mapping) => {
                let mut map = serializer.serialize_map(Some(mapping.len()))?;
                for (key, value) in mapping.iter() {
                    map.serialize_entry(key, &self.child(value))?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for Tree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        TypedTree::new(self, ScalarTyping::Strict).serialize(serializer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum NativeScalar<'a> {
    Null,
    Bool(bool),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(&'a str),
}

impl<'a> NativeScalar<'a> {
    fn classify(text: &'a str, typing: ScalarTyping) -> Self {
        match text {
            "" if typing == ScalarTyping::Flow => return NativeScalar::Null,
            "true" => return NativeScalar::Bool(true),
            "false" => return NativeScalar::Bool(false),
            _ => {}
        }

        // Only canonical spellings are typed: "007", "+1" or "1e3" stay strings.
        if let Ok(value) = text.parse::<i64>() {
            if value.to_string() == text {
                return NativeScalar::Signed(value);
            }
        }
        if let Ok(value) = text.parse::<u64>() {
            if value.to_string() == text {
                return NativeScalar::Unsigned(value);
            }
        }
        if let Ok(value) = text.parse::<f64>() {
            if value.is_finite() && value.to_string() == text {
                return NativeScalar::Float(value);
            }
        }
        NativeScalar::Text(text)
    }
}
