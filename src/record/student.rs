//! Student record implementation

use serde::{Deserialize, Serialize};

use super::{validate_marks, Grade, NamedEntity, StudentId, UNRECORDED};
use crate::error::{Result, RollbookError};

/// One student's record
///
/// `id` is fixed at construction. `grade` is recomputed by every marks
/// change, so it can never drift from `marks`. Text fields are stored
/// trimmed, matching what a load reads back.
///
/// Deserializing recomputes `grade` from `marks` and ignores the stored one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecordFields")]
pub struct Record {
    id: StudentId,
    name: String,
    email: String,
    course: String,
    marks: Option<f64>,
    grade: Grade,
}

impl Record {
    /// Create a validated record
    ///
    /// Fails with `Validation` if `name` or `course` is blank, or if `marks`
    /// is present and outside `0..=100`.
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        email: impl Into<String>,
        course: impl Into<String>,
        marks: Option<f64>,
    ) -> Result<Self> {
        let name = name.into().trim().to_string();
        let course = course.into().trim().to_string();

        if name.is_empty() {
            return Err(RollbookError::validation("name cannot be empty"));
        }
        if course.is_empty() {
            return Err(RollbookError::validation("course cannot be empty"));
        }
        validate_marks(marks)?;

        let email = email.into().trim().to_string();
        Ok(Self::from_stored(id, name, email, course, marks))
    }

    /// Build a record from persisted fields without validation.
    ///
    /// Out-of-range marks are kept and grade to `Incomplete`.
    pub(crate) fn from_stored(
        id: StudentId,
        name: String,
        email: String,
        course: String,
        marks: Option<f64>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            course,
            marks,
            grade: Grade::from_marks(marks),
        }
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Replace marks and recompute the grade. `None` means "unrecorded".
    pub fn set_marks(&mut self, marks: Option<f64>) {
        self.marks = marks;
        self.grade = Grade::from_marks(marks);
    }

    /// Replace the email (stored trimmed)
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into().trim().to_string();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn marks(&self) -> Option<f64> {
        self.marks
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Fields in the fixed order `id, name, email, course, marks, grade`
    pub fn describe(&self) -> Vec<(&'static str, String)> {
        let marks = match self.marks {
            Some(m) => format!("{:.1}", m),
            None => UNRECORDED.to_string(),
        };

        vec![
            ("id", self.id.to_string()),
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("course", self.course.clone()),
            ("marks", marks),
            ("grade", self.grade.to_string()),
        ]
    }
}

/// Serialized shape of a record; `grade` is read but not trusted
#[derive(Deserialize)]
struct RecordFields {
    id: StudentId,
    name: String,
    email: String,
    course: String,
    marks: Option<f64>,
    #[allow(dead_code)]
    grade: Grade,
}

impl From<RecordFields> for Record {
    fn from(fields: RecordFields) -> Self {
        Record::from_stored(fields.id, fields.name, fields.email, fields.course, fields.marks)
    }
}

impl NamedEntity for Record {
    fn name(&self) -> &str {
        Record::name(self)
    }

    fn email(&self) -> &str {
        Record::email(self)
    }

    fn describe(&self) -> Vec<(&'static str, String)> {
        Record::describe(self)
    }
}
