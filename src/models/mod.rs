//! Data models shared by the parsers, the search walk, and the CLI.
//!
//! - [`Record`] - A key/value pair produced by every format parser
//! - [`SearchMatch`] - A record annotated with the file it was found in
//! - [`SearchOutcome`] - Result of a directory search, including the no-data cases
//!
//! Both record fields are `Option<String>`: `None` means the field was not present
//! in the source at all, `Some("")` means it was present but empty. The two only
//! collapse when a record is rendered for output.

pub mod record;
pub mod search;

pub use record::Record;
pub use search::{SearchMatch, SearchOutcome};
