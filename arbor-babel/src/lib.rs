//! Data-interchange transcoding between XML, JSON and YAML
//!
//!     This crate reads a document in one of three hierarchical formats into a single neutral
//!     tree, then renders that tree in any of the three. The formats are:
//!
//!     - markup (XML, `.xml`): elements under one synthetic root
//!     - keyvalue (JSON, `.json`): strict, natively typed scalars
//!     - flow (YAML, `.yml`/`.yaml`): block style, same shape as keyvalue
//!
//!     This is a pure lib: it never prints, reads the environment, writes logs or exits the
//!     process. Every failure is returned as a [`FormatError`] and the shell decides what to
//!     do with it. The library emits `tracing` events at debug level and leaves installing a
//!     subscriber to the shell.
//!
//! Architecture
//!
//!     input bytes → source adapter `parse` → [`Tree`] → target adapter `serialize` → bytes
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── convert.rs              # Byte and file conversion entry points
//!     ├── tree                    # Neutral tree model + serde glue
//!     ├── formats
//!     │   ├── markup              # parser.rs / serializer.rs
//!     │   ├── keyvalue
//!     │   └── flow
//!     └── lib.rs
//!
//! Core Algorithms
//!
//!     JSON and YAML map onto the tree directly; their adapters are thin layers over serde,
//!     with the tree implementing `Deserialize` (source-ordered maps, text scalars) and
//!     `Serialize` (tree-ordered maps, lossless native typing).
//!
//!     XML is the hard case. A branching element becomes a mapping keyed by child tag, and
//!     repeated tags are folded into sequences on the second occurrence (see
//!     [`tree::Mapping::insert_folding`]). On the way out, a sequence under key `k` is written
//!     as repeated `<k>` siblings. A single occurrence is indistinguishable from a list of one;
//!     that ambiguity is inherent to XML and is kept as is.
//!
//! Testing
//!
//!     tests
//!     └── <format>
//!         ├── import.rs / export.rs
//!     ├── roundtrip.rs        # cross-format and property tests
//!
//!     Note that rust does not by default discover tests in subdirectories, so they are
//!     included from tests/lib.rs.

pub mod convert;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod tree;

pub use convert::{convert, convert_file, convert_with, ConvertArtifact, ConvertSpec};
pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
pub use tree::{Mapping, Tree};
