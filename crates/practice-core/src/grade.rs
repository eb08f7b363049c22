//! Letter grades from percentage marks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{BUCKET_WIDTH, MAX_MARKS, MIN_MARKS};
use crate::error::PracticeError;

/// Letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Map a decile bucket to its grade. Every bucket maps to a grade;
    /// anything below 6 is an F.
    #[must_use]
    pub fn from_bucket(bucket: i64) -> Self {
        match bucket {
            9 | 10 => Self::A,
            8 => Self::B,
            7 => Self::C,
            6 => Self::D,
            _ => Self::F,
        }
    }

    /// The grade as a single-letter label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decile bucket of a score, truncating toward zero (89 → 8).
#[must_use]
pub fn bucket(marks: i64) -> i64 {
    marks / BUCKET_WIDTH
}

/// Classify percentage marks in `0..=100`.
///
/// # Errors
///
/// [`PracticeError::MarksOutOfRange`] when `marks` is outside `0..=100`.
pub fn classify(marks: i64) -> Result<Grade, PracticeError> {
    if !(MIN_MARKS..=MAX_MARKS).contains(&marks) {
        return Err(PracticeError::MarksOutOfRange(marks));
    }
    Ok(Grade::from_bucket(bucket(marks)))
}
