//! Neutral tree model shared by every format adapter
//!
//!     A [`Tree`] is what every parser produces and every serializer consumes. It has three
//!     shapes only: a textual [`Tree::Scalar`], an ordered [`Tree::Sequence`] and an ordered
//!     [`Tree::Mapping`]. Scalars stay text on purpose: each adapter owns its own coercion
//!     rules, so the tree never guesses at numbers or booleans.
//!
//!     Mapping order is the order in which keys were met in the source document, and all
//!     adapters must keep it.
//!
//! Single value vs list
//!
//!     Key/value formats tell sequences apart natively. Markup does not: a repeated child tag
//!     is the only signal. [`Mapping::insert_folding`] implements that signal as an explicit
//!     transition per key (absent → value → sequence), while [`Mapping::insert`] is the plain
//!     "replace in place" used by formats with native sequences.

mod de;
pub mod ser;

pub use ser::{ScalarTyping, TypedTree};

/// A document materialized in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
    /// Textual leaf. Empty elements and null values become `Scalar("")`.
    Scalar(String),
    /// Ordered sibling values sharing one key.
    Sequence(Vec<Tree>),
    /// Ordered key/value pairs.
    Mapping(Mapping),
}

impl Tree {
    pub fn scalar(text: impl Into<String>) -> Self {
        Tree::Scalar(text.into())
    }

    /// Build a sequence from any iterator of values.
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tree>,
    {
        Tree::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Build a mapping from `(key, value)` pairs; later duplicates replace earlier values.
    pub fn mapping<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Tree>,
    {
        Tree::Mapping(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Tree::Scalar(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Tree]> {
        match self {
            Tree::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Tree::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Tree::Scalar(_) => "scalar",
            Tree::Sequence(_) => "sequence",
            Tree::Mapping(_) => "mapping",
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Tree::Scalar(String::new())
    }
}

impl From<&str> for Tree {
    fn from(text: &str) -> Self {
        Tree::Scalar(text.to_string())
    }
}

impl From<String> for Tree {
    fn from(text: String) -> Self {
        Tree::Scalar(text)
    }
}

impl From<Mapping> for Tree {
    fn from(mapping: Mapping) -> Self {
        Tree::Mapping(mapping)
    }
}

impl From<Vec<Tree>> for Tree {
    fn from(items: Vec<Tree>) -> Self {
        Tree::Sequence(items)
    }
}

/// Ordered association from string keys to subtrees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(String, Tree)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Tree> {
        self.position(key).map(|index| &self.entries[index].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tree)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Insert `value` under `key`.
    ///
    /// An existing key keeps its position and gets the new value; a new key is appended.
    /// Returns the replaced value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Tree) -> Option<Tree> {
        let key = key.into();
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Insert `value` under `key`, folding repeated keys into a sequence.
    ///
    /// - absent key: stored as a bare value
    /// - key holding a non-sequence: promoted in place to `[old, value]`
    /// - key holding a sequence: `value` is appended
    ///
    /// A single occurrence therefore never becomes a one-element sequence.
    pub fn insert_folding(&mut self, key: impl Into<String>, value: Tree) {
        let key = key.into();
        let Some(index) = self.position(&key) else {
            self.entries.push((key, value));
            return;
        };

        let slot = &mut self.entries[index].1;
        match slot {
            Tree::Sequence(items) => items.push(value),
            _ => {
                let first = std::mem::take(slot);
                *slot = Tree::Sequence(vec![first, value]);
            }
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(existing, _)| existing == key)
    }
}

impl<K: Into<String>> FromIterator<(K, Tree)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, Tree)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Tree);
    type IntoIter = std::vec::IntoIter<(String, Tree)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
