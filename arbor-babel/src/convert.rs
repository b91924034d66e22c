//! Conversion pipeline.
//!
//! Provides the high-level entry points: bytes in one format to bytes in another, and the
//! same for files. Each call decodes the whole input into a [`Tree`] before encoding
//! starts; there is no streaming and no shared state between calls.
//!
//! For more control over the conversion process, use [`FormatRegistry`] directly.

use crate::error::FormatError;
use crate::registry::FormatRegistry;
use crate::tree::Tree;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Convert `input` from one format to another using the default registry.
///
/// Both format tokens are validated before the input is looked at.
pub fn convert(input: &[u8], from: &str, to: &str) -> Result<Vec<u8>, FormatError> {
    convert_with(&FormatRegistry::default(), input, from, to, &HashMap::new())
}

/// Convert `input` using a caller-provided registry and serializer options.
pub fn convert_with(
    registry: &FormatRegistry,
    input: &[u8],
    from: &str,
    to: &str,
    options: &HashMap<String, String>,
) -> Result<Vec<u8>, FormatError> {
    convert_to_string(registry, input, from, to, options).map(String::into_bytes)
}

fn convert_to_string(
    registry: &FormatRegistry,
    input: &[u8],
    from: &str,
    to: &str,
    options: &HashMap<String, String>,
) -> Result<String, FormatError> {
    let source_format = registry.get(from)?;
    let target_format = registry.get(to)?;

    let source = std::str::from_utf8(input)
        .map_err(|e| FormatError::decode(from, format!("input is not valid UTF-8: {e}")))?;
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let tree: Tree = source_format.parse(source)?;
    debug!(from, to, root = tree.kind(), "decoded document");

    target_format.serialize_with_options(&tree, options)
}

/// Specifies a file-based conversion.
///
/// Use the builder pattern to configure it:
///
/// ```ignore
/// let spec = ConvertSpec::new("input.xml")
///     .with_output_path("output.json")
///     .with_option("indent", "2");
/// ```
///
/// Formats are detected from the file extensions unless given explicitly. Without an
/// output path the result is returned in memory, and the target format must be explicit.
#[derive(Debug, Clone, Default)]
pub struct ConvertSpec {
    /// The document to read.
    pub input: PathBuf,
    /// Optional file path for writing output.
    pub output: Option<PathBuf>,
    /// Source format name; detected from `input` when absent.
    pub from: Option<String>,
    /// Target format name; detected from `output` when absent.
    pub to: Option<String>,
    /// Serializer options for the target format (e.g., root tag, indent).
    pub options: HashMap<String, String>,
}

impl ConvertSpec {
    pub fn new(input: impl AsRef<Path>) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Sets the output file path. If provided, content is written to disk.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_from(mut self, format: impl Into<String>) -> Self {
        self.from = Some(format.into());
        self
    }

    pub fn with_to(mut self, format: impl Into<String>) -> Self {
        self.to = Some(format.into());
        self
    }

    /// Adds a serializer option for the target format.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// The output from a successful file conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertArtifact {
    /// Content held in memory (no output path was given).
    InMemory(String),
    /// Path to the written file.
    File(PathBuf),
}

/// Converts the file described by `spec`.
///
/// Formats are resolved and validated before any file is opened, and the output file is
/// only written once the whole conversion has succeeded.
///
/// # Errors
///
/// Returns [`FormatError`] if:
/// - a format cannot be detected or is not registered (`UnsupportedFormat`)
/// - no target format can be determined (`NotSupported`)
/// - the input cannot be decoded (`Decode`) or the tree cannot be encoded (`Encode`)
/// - reading or writing fails (`Io`)
pub fn convert_file(
    registry: &FormatRegistry,
    spec: &ConvertSpec,
) -> Result<ConvertArtifact, FormatError> {
    let from = resolve_format(registry, spec.from.as_deref(), &spec.input)?;
    let to = match (spec.to.as_deref(), spec.output.as_deref()) {
        (explicit, Some(output)) => resolve_format(registry, explicit, output)?,
        (Some(explicit), None) => registry.get(explicit)?.name().to_string(),
        (None, None) => {
            return Err(FormatError::NotSupported(
                "a target format is required when no output path is given".to_string(),
            ))
        }
    };

    let input = fs::read(&spec.input).map_err(|e| FormatError::io(&spec.input, e))?;
    debug!(input = %spec.input.display(), %from, %to, "converting file");

    let text = convert_to_string(registry, &input, &from, &to, &spec.options)?;

    match &spec.output {
        Some(path) => {
            fs::write(path, text.as_bytes()).map_err(|e| FormatError::io(path, e))?;
            Ok(ConvertArtifact::File(path.clone()))
        }
        None => Ok(ConvertArtifact::InMemory(text)),
    }
}

/// Pick the explicit format if given, else detect it from the path's extension.
pub fn resolve_format(
    registry: &FormatRegistry,
    explicit: Option<&str>,
    path: &Path,
) -> Result<String, FormatError> {
    if let Some(name) = explicit {
        return registry.get(name).map(|format| format.name().to_string());
    }

    registry.detect_format_from_filename(path).ok_or_else(|| {
        let token = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_else(|| path.display().to_string());
        FormatError::UnsupportedFormat(token)
    })
}
