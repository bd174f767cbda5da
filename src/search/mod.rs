//! Recursive key search over a directory of data files
//!
//! # Error Handling Strategy
//!
//! Searching is lenient at the file level and strict nowhere else:
//!
//! - **Unsupported files**: Files whose extension has no parser (or no extension at
//!   all) are skipped without output.
//!
//! - **Broken files**: Files that cannot be read, exceed the size limit or fail to
//!   parse are skipped, so one malformed file never hides the matches in the rest.
//!   Skips are reported through `tracing` at debug level only.
//!
//! - **No-data results**: An empty key, a missing directory and a search with no
//!   matches are [`SearchOutcome`](crate::models::SearchOutcome) variants rather than
//!   errors; the fixed messages for them are produced when the outcome is rendered.

pub mod aggregator;

pub use aggregator::{search_directory, search_lines};
