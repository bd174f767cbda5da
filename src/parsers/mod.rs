//! Parsers for the CSV, JSON and XML record formats
//!
//! # Error Handling Strategy
//!
//! Every parser turns the whole file content into a `Vec<Record>` in one call:
//!
//! - **CSV** is best effort and never fails. Short lines keep their missing
//!   tokens as absent fields instead of being dropped.
//!
//! - **JSON and XML** fail with a [`FormatError`](crate::error::FormatError) when
//!   the content is not well formed or does not have the expected record shape.
//!   The caller decides what a failure means: the display operation reports it,
//!   the directory search skips the file.
//!
//! - **Blank input** is an empty record list for every format, not an error.
//!
//! [`ContentFormat`] maps a file extension to the matching parser.

pub mod csv;
pub mod format;
pub mod json;
pub mod xml;

pub use csv::parse_csv;
pub use format::ContentFormat;
pub use json::parse_json;
pub use xml::parse_xml;
