//! Record Module
//!
//! The student entity and its derived grade.
//!
//! ## Responsibilities
//! - Hold one student's fields
//! - Keep `grade` consistent with `marks` (never set directly)
//! - Validate caller-supplied fields on construction
//! - Produce labeled fields for display; never print

mod grade;
mod student;

pub use grade::Grade;
pub use student::Record;

use crate::error::{Result, RollbookError};

/// Caller-assigned student identifier (the roll number)
pub type StudentId = i32;

/// Lowest accepted marks value
pub const MIN_MARKS: f64 = 0.0;

/// Highest accepted marks value
pub const MAX_MARKS: f64 = 100.0;

/// Rendered in place of marks that have not been recorded yet
pub const UNRECORDED: &str = "unrecorded";

/// Anything with a display name and contact email that can describe itself
pub trait NamedEntity {
    fn name(&self) -> &str;

    fn email(&self) -> &str;

    /// Labeled fields in display order
    fn describe(&self) -> Vec<(&'static str, String)>;
}

/// Check that marks, when present, lie in `[MIN_MARKS, MAX_MARKS]`
pub fn validate_marks(marks: Option<f64>) -> Result<()> {
    match marks {
        Some(m) if !(MIN_MARKS..=MAX_MARKS).contains(&m) => Err(RollbookError::validation(
            format!("marks must be between {} and {}, got {}", MIN_MARKS, MAX_MARKS, m),
        )),
        _ => Ok(()),
    }
}
