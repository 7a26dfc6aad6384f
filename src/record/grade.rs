//! Letter grade derivation

use std::fmt;

use serde::{Deserialize, Serialize};

/// Letter grade derived from a student's marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// 90 to 100
    A,
    /// 80 up to 90
    B,
    /// 70 up to 80
    C,
    /// 0 up to 70
    D,
    /// Marks unrecorded or outside 0..=100
    Incomplete,
}

impl Grade {
    /// Derive the grade for an optional marks value
    pub fn from_marks(marks: Option<f64>) -> Self {
        match marks {
            Some(m) if !(0.0..=100.0).contains(&m) => Grade::Incomplete,
            Some(m) if m >= 90.0 => Grade::A,
            Some(m) if m >= 80.0 => Grade::B,
            Some(m) if m >= 70.0 => Grade::C,
            Some(_) => Grade::D,
            None => Grade::Incomplete,
        }
    }

    /// Single-character form ('I' for incomplete)
    pub fn as_char(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::Incomplete => 'I',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
