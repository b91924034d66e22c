//! Format implementations
//!
//! This module contains the three format adapters. Each one converts between its textual
//! syntax and the [`Tree`](crate::tree::Tree) model and knows nothing about the others.

pub mod flow;
pub mod keyvalue;
pub mod markup;

pub use flow::FlowFormat;
pub use keyvalue::KeyValueFormat;
pub use markup::{MarkupFormat, MarkupOptions};
