use std::collections::HashMap;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::ExplorerError;
use crate::models::{SearchMatch, SearchOutcome};
use crate::parsers::ContentFormat;
use crate::utils::{file_extension, read_data_file, relative_to_parent};

/// Search every supported file under `base_dir` for records whose key starts
/// with `search_key`, ignoring case.
///
/// Files are visited recursively in file name order, following symbolic
/// links. Each match carries the file path relative to the parent of
/// `base_dir`, so `base_dir`'s own name is the first path segment.
///
/// # Returns
///
/// - [`SearchOutcome::EmptyKey`] if `search_key` is blank; the file system is not touched
/// - [`SearchOutcome::MissingDirectory`] if `base_dir` is not an existing directory
/// - [`SearchOutcome::NoMatches`] if nothing matched
/// - [`SearchOutcome::Matches`] otherwise
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use record_explorer::search_directory;
///
/// let outcome = search_directory(Path::new("./data"), "hello");
/// for line in outcome.to_lines() {
///     println!("{}", line);
/// }
/// ```
pub fn search_directory(base_dir: &Path, search_key: &str) -> SearchOutcome {
    if search_key.trim().is_empty() {
        return SearchOutcome::EmptyKey;
    }
    if !base_dir.is_dir() {
        return SearchOutcome::MissingDirectory;
    }

    // Format lookup per lowercased extension, including the unsupported ones
    let mut formats: HashMap<String, Option<ContentFormat>> = HashMap::new();
    let mut matches = Vec::new();
    let mut files_scanned = 0usize;
    let mut files_skipped = 0usize;

    // Symlinks are followed; walkdir reports link cycles as entry errors
    for entry in WalkDir::new(base_dir).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let extension = file_extension(path).to_lowercase();
        let format = *formats
            .entry(extension)
            .or_insert_with_key(|extension| ContentFormat::from_extension(extension).ok());
        let Some(format) = format else {
            continue;
        };

        files_scanned += 1;
        let parsed = read_data_file(path)
            .and_then(|content| format.parse(&content).map_err(ExplorerError::from));
        let records = match parsed {
            Ok(records) => records,
            Err(e) => {
                files_skipped += 1;
                debug!(path = %path.display(), error = %e, "skipping file");
                continue;
            }
        };

        let found: Vec<_> =
            records.into_iter().filter(|record| record.key_starts_with(search_key)).collect();
        if found.is_empty() {
            continue;
        }

        let relative_path = relative_to_parent(base_dir, path);
        matches.extend(found.into_iter().map(|record| SearchMatch {
            record,
            relative_path: relative_path.clone(),
        }));
    }

    debug!(
        base_dir = %base_dir.display(),
        files_scanned,
        files_skipped,
        matches = matches.len(),
        "search finished"
    );

    if matches.is_empty() { SearchOutcome::NoMatches } else { SearchOutcome::Matches(matches) }
}

/// [`search_directory`] rendered as output lines: one `Key:.. Value:.. FileName:..`
/// line per match, or the single message for an empty key, a missing directory or
/// no matches.
pub fn search_lines(base_dir: &Path, search_key: &str) -> Vec<String> {
    search_directory(base_dir, search_key).to_lines()
}
