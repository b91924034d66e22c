//! Error types for format operations

use thiserror::Error;

/// Errors that can occur while decoding, encoding or converting a document.
///
/// Every variant is fatal to the conversion in progress; nothing is retried and
/// no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Unknown format token or unrecognized file extension
    #[error("Unsupported format '{0}'")]
    UnsupportedFormat(String),

    /// The input is not a well-formed document of the detected format
    #[error("Decode error ({format}): {message}")]
    Decode { format: String, message: String },

    /// The tree cannot be rendered by the target format
    #[error("Encode error ({format}): {message}")]
    Encode { format: String, message: String },

    /// Reading the input or writing the output failed
    #[error("I/O error on '{path}': {message}")]
    Io { path: String, message: String },

    /// The format does not accept the requested option
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

impl FormatError {
    pub(crate) fn decode(format: &str, message: impl ToString) -> Self {
        FormatError::Decode {
            format: format.to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn encode(format: &str, message: impl ToString) -> Self {
        FormatError::Encode {
            format: format.to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        FormatError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
