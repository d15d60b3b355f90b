//! Error types for conversion, encoding and decoding operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting between JSON and CBOR.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A path could not be resolved (e.g. `~` with no home directory) or a
    /// file could not be opened or created.
    #[error("not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    /// The input was not valid JSON (encoding path).
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading or writing failed after the file was opened.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The CBOR serializer failed (encoding path).
    #[error("CBOR encode error: {0}")]
    Encode(String),

    /// The input was not well-formed CBOR, or held an item with no JSON
    /// equivalent. `offset` is the byte position where reading stopped; it is
    /// `None` when the bytes parsed but the item could not be mapped to JSON.
    #[error("CBOR decode error{}: {}", at_byte(.offset), .message)]
    Decode {
        offset: Option<usize>,
        message: String,
    },
}

fn at_byte(offset: &Option<usize>) -> String {
    offset.map(|o| format!(" at byte {o}")).unwrap_or_default()
}

impl ConvertError {
    /// Stable short label for the error kind, used in CLI diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::NotFound { .. } => "not-found",
            ConvertError::Parse(_) => "parse",
            ConvertError::Io { .. } => "io",
            ConvertError::Encode(_) => "encode",
            ConvertError::Decode { .. } => "decode",
        }
    }

    pub(crate) fn not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::NotFound {
            path: path.into(),
            source: Some(source),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout jsonbin-core.
pub type Result<T> = std::result::Result<T, ConvertError>;
