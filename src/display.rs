use std::path::Path;

use tracing::debug;

use crate::error::ExplorerError;
use crate::models::Record;
use crate::parsers::ContentFormat;
use crate::utils::read_data_file;

/// Parse a single data file and return all of its records.
///
/// The format is chosen from the extension before the file is opened, so an
/// unsupported file is rejected without being read. The caller is expected to have
/// checked that `path` exists.
///
/// # Errors
///
/// - [`ExplorerError::EmptyExtension`] / [`ExplorerError::UnsupportedExtension`] if
///   the extension has no parser
/// - [`ExplorerError::Io`] / [`ExplorerError::FileTooLarge`] if the file cannot be read
/// - [`ExplorerError::Format`] if the content does not parse
pub fn display_file(path: &Path) -> Result<Vec<Record>, ExplorerError> {
    let format = ContentFormat::from_path(path)?;
    let content = read_data_file(path)?;
    let records = format.parse(&content)?;
    debug!(path = %path.display(), %format, records = records.len(), "displaying file");
    Ok(records)
}
