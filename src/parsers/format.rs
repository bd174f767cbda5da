use std::fmt;
use std::path::Path;

use tracing::trace;

use crate::error::{ExplorerError, FormatError};
use crate::models::Record;
use crate::parsers::{parse_csv, parse_json, parse_xml};
use crate::utils::file_extension;

/// The record formats understood by the explorer, one per supported extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentFormat {
    Csv,
    Json,
    Xml,
}

impl ContentFormat {
    /// Select the format for a file extension such as `.csv`.
    ///
    /// The comparison ignores case; the leading dot is required.
    ///
    /// # Errors
    ///
    /// - [`ExplorerError::EmptyExtension`] if `extension` is empty or whitespace
    /// - [`ExplorerError::UnsupportedExtension`] for anything other than
    ///   `.csv`, `.json` or `.xml`
    ///
    /// # Examples
    ///
    /// ```
    /// use record_explorer::parsers::ContentFormat;
    ///
    /// assert_eq!(ContentFormat::from_extension(".JSON").unwrap(), ContentFormat::Json);
    /// assert!(ContentFormat::from_extension(".yaml").is_err());
    /// ```
    pub fn from_extension(extension: &str) -> Result<Self, ExplorerError> {
        if extension.trim().is_empty() {
            return Err(ExplorerError::EmptyExtension);
        }

        match extension.to_lowercase().as_str() {
            ".csv" => Ok(ContentFormat::Csv),
            ".json" => Ok(ContentFormat::Json),
            ".xml" => Ok(ContentFormat::Xml),
            _ => Err(ExplorerError::UnsupportedExtension(extension.to_string())),
        }
    }

    /// Select the format from a file path's extension. A path without an
    /// extension is reported as [`ExplorerError::EmptyExtension`].
    pub fn from_path(path: &Path) -> Result<Self, ExplorerError> {
        Self::from_extension(&file_extension(path))
    }

    /// Parse file content with this format's parser
    pub fn parse(self, content: &str) -> Result<Vec<Record>, FormatError> {
        trace!(format = %self, bytes = content.len(), "parsing content");
        match self {
            ContentFormat::Csv => Ok(parse_csv(content)),
            ContentFormat::Json => parse_json(content),
            ContentFormat::Xml => parse_xml(content),
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentFormat::Csv => "CSV",
            ContentFormat::Json => "JSON",
            ContentFormat::Xml => "XML",
        };
        f.write_str(name)
    }
}
