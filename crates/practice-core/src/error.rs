//! Domain errors for the practice computations.

use crate::constants::{MAX_MARKS, MAX_TERMS, MIN_MARKS};

/// Input rejected by one of the practice computations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PracticeError {
    /// The requested number of Fibonacci terms was zero or negative.
    #[error("term count must be positive, got {0}")]
    InvalidTermCount(i64),

    /// The requested number of Fibonacci terms overflows 64-bit arithmetic.
    #[error("term count {0} exceeds the {max} terms representable in 64 bits", max = MAX_TERMS)]
    TooManyTerms(i64),

    /// Percentage marks fell outside the accepted range.
    #[error("marks {0} outside {min}..={max}", min = MIN_MARKS, max = MAX_MARKS)]
    MarksOutOfRange(i64),
}
