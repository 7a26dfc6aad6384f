//! Line encoding
//!
//! One record per line: `id,name,email,course,marks`.

use thiserror::Error;

use crate::record::{Record, StudentId};

/// Number of comma-separated fields in a well-formed line
pub const FIELD_COUNT: usize = 5;

/// Field separator. Fields are not escaped.
pub const DELIMITER: char = ',';

/// Why a persisted line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedLine {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid id {0:?}")]
    InvalidId(String),

    #[error("invalid marks {0:?}")]
    InvalidMarks(String),

    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

/// Encode a record as one line (without the trailing newline)
///
/// Marks are written with one decimal place; unrecorded marks leave the
/// last field empty.
pub fn encode_record(record: &Record) -> String {
    let marks = record
        .marks()
        .map(|m| format!("{:.1}", m))
        .unwrap_or_default();

    format!(
        "{id}{d}{name}{d}{email}{d}{course}{d}{marks}",
        id = record.id(),
        name = record.name(),
        email = record.email(),
        course = record.course(),
        marks = marks,
        d = DELIMITER,
    )
}

/// Decode one line into a record
///
/// Fields are trimmed. Marks must be a finite decimal (`NaN` and `inf` are
/// rejected). The record is built without domain validation, so
/// out-of-range marks survive a load and grade as incomplete.
pub fn decode_record(line: &str) -> Result<Record, MalformedLine> {
    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(MalformedLine::FieldCount(fields.len()));
    }

    let id: StudentId = fields[0]
        .parse()
        .map_err(|_| MalformedLine::InvalidId(fields[0].to_string()))?;

    let marks = match fields[4] {
        "" => None,
        raw => match raw.parse::<f64>() {
            Ok(m) if m.is_finite() => Some(m),
            _ => return Err(MalformedLine::InvalidMarks(raw.to_string())),
        },
    };

    Ok(Record::from_stored(
        id,
        fields[1].to_string(),
        fields[2].to_string(),
        fields[3].to_string(),
        marks,
    ))
}
