use std::fmt;
use std::path::PathBuf;

use super::Record;

pub const EMPTY_KEY_MESSAGE: &str = "Search key cannot be empty.";
pub const MISSING_DIRECTORY_MESSAGE: &str = "Data directory does not exist.";
pub const NO_MATCHES_MESSAGE: &str = "No matching data found.";

/// A record found by a directory search, with the path of the file it came from
/// relative to the parent of the searched directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub record: Record,
    pub relative_path: PathBuf,
}

impl fmt::Display for SearchMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} FileName:{}", self.record, self.relative_path.display())
    }
}

/// Result of a directory search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The search key was empty or whitespace
    EmptyKey,
    /// The base directory does not exist
    MissingDirectory,
    /// Every file was scanned and nothing matched
    NoMatches,
    /// At least one match
    Matches(Vec<SearchMatch>),
}

impl SearchOutcome {
    pub fn matches(&self) -> &[SearchMatch] {
        match self {
            SearchOutcome::Matches(matches) => matches,
            _ => &[],
        }
    }

    /// Renders the outcome as output lines: either one line per match or a single
    /// message for the no-data cases.
    pub fn to_lines(&self) -> Vec<String> {
        match self {
            SearchOutcome::EmptyKey => vec![EMPTY_KEY_MESSAGE.to_string()],
            SearchOutcome::MissingDirectory => vec![MISSING_DIRECTORY_MESSAGE.to_string()],
            SearchOutcome::NoMatches => vec![NO_MATCHES_MESSAGE.to_string()],
            SearchOutcome::Matches(matches) => matches.iter().map(ToString::to_string).collect(),
        }
    }
}
