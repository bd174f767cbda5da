//! Error types for reading and parsing data files.

use std::path::PathBuf;

use thiserror::Error;

/// Content did not match the grammar of its format.
#[derive(Debug, Error)]
pub enum FormatError {
    /// JSON syntax error or a document that does not have the record array shape.
    #[error("Invalid JSON format: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed XML or a document that does not have the `Datas`/`Data` shape.
    #[error("Invalid XML format at position {position}: {message}")]
    Xml { position: u64, message: String },
}

impl FormatError {
    pub fn xml(position: u64, message: impl Into<String>) -> Self {
        Self::Xml { position, message: message.into() }
    }
}

/// Errors surfaced by the display operation and the format lookup.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// No extension (or a blank one) was given to the format lookup.
    #[error("File extension must not be null or empty.")]
    EmptyExtension,

    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File too large: {} ({size} bytes, max {limit} bytes)", .path.display())]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },
}

impl ExplorerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// True for the errors raised while choosing a parser, before any file is read.
    pub fn is_extension_error(&self) -> bool {
        matches!(self, Self::EmptyExtension | Self::UnsupportedExtension(_))
    }
}

pub type Result<T, E = ExplorerError> = std::result::Result<T, E>;
