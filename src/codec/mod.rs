//! Persistence Codec Module
//!
//! Reads and writes the store as a line-oriented flat file.
//!
//! ## File Format
//! ```text
//! <id:int>,<name>,<email>,<course>,<marks:decimal, 1 fraction digit>
//! 10,Ada Lovelace,ada@uni.edu,Mathematics,92.0
//! 11,Alan Turing,alan@uni.edu,Computing,
//! ```
//!
//! - One record per line, no header
//! - An empty marks field means the marks are unrecorded
//! - No escaping: a comma inside a field makes the line malformed, and a
//!   line break inside a field splits the record into malformed lines, so
//!   such a record is lost on the next load
//!
//! ## Load Rules
//! - A line is well-formed iff it has exactly five fields, the id parses
//!   as an integer and the marks parse as a finite decimal (or are empty)
//! - Malformed lines are skipped with a warning; the load continues
//! - A repeated id replaces the earlier record (last line wins)
//! - A missing file loads as an empty store

mod file;
mod line;

pub use file::{LoadReport, RecordFile, SkippedLine};
pub use line::{decode_record, encode_record, MalformedLine, DELIMITER, FIELD_COUNT};
