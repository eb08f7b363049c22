//! # practice-core
//!
//! Pure computations behind the practice programs: Fibonacci terms,
//! letter grades, palindrome checks, and interest formulas.

pub mod constants;
pub mod error;
pub mod grade;
pub mod interest;
pub mod palindrome;
pub mod sequence;

// Re-exports
pub use constants::{exit_codes, MAX_LINE_BYTES, MAX_MARKS, MAX_TERMS, MIN_MARKS};
pub use error::PracticeError;
pub use grade::{classify, Grade};
pub use interest::{compute, InterestInputs, InterestReport};
pub use palindrome::{check, normalize, Verdict};
pub use sequence::{fibonacci_terms, FibSequence};
