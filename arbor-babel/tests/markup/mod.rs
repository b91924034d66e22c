//! Markup format tests
//!
//! Tests for XML ↔ Tree conversion, including the repeated-tag folding rules.

mod export;
mod import;
