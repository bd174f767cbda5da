//! Record Explorer - Display and search key/value records in CSV, JSON and XML files
//!
//! Every data file holds a flat list of records with an optional `Key` and an
//! optional `Value`. This library provides:
//!
//! - Parsers for the three formats, producing one uniform [`Record`] shape
//! - Format selection from a file extension ([`ContentFormat`])
//! - Displaying the records of a single file ([`display_file`])
//! - Recursive, case-insensitive key prefix search over a directory ([`search_directory`])
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use record_explorer::{SearchOutcome, search_directory};
//!
//! match search_directory(Path::new("./data"), "hello") {
//!     SearchOutcome::Matches(matches) => {
//!         for found in matches {
//!             println!("{}", found);
//!         }
//!     }
//!     other => println!("{}", other.to_lines().join("\n")),
//! }
//! ```

pub mod cli;
pub mod display;
pub mod error;
pub mod models;
pub mod parsers;
pub mod search;
pub mod utils;

// Re-export commonly used types
pub use display::display_file;
pub use error::{ExplorerError, FormatError};
pub use models::{Record, SearchMatch, SearchOutcome};
pub use parsers::ContentFormat;
pub use search::{search_directory, search_lines};
