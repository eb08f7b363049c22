//! Limits and fixed tables shared by the practice programs.

/// Number of Fibonacci terms representable in a `u64`.
///
/// Term 94 is F(93) = 12,200,160,415,121,876,738. The next term,
/// F(94) = 19,740,274,219,868,223,167, overflows `u64::MAX`.
pub const MAX_TERMS: u64 = 94;

/// Largest value of the final term (term [`MAX_TERMS`]).
pub const MAX_TERM_VALUE: u64 = 12_200_160_415_121_876_738;

/// Lowest accepted percentage score.
pub const MIN_MARKS: i64 = 0;

/// Highest accepted percentage score.
pub const MAX_MARKS: i64 = 100;

/// Width of one grade bucket.
pub const BUCKET_WIDTH: i64 = 10;

/// Maximum number of bytes of a line considered by the palindrome check.
pub const MAX_LINE_BYTES: usize = 1023;

/// Process exit codes.
///
/// Every handled outcome, including rejected or unparsable input, exits
/// with [`exit_codes::SUCCESS`]. Only console I/O failures are reported
/// with a non-zero status.
pub mod exit_codes {
    /// Successful execution, or input that was reported and declined.
    pub const SUCCESS: i32 = 0;
    /// Console I/O failure.
    pub const ERROR_GENERIC: i32 = 1;
}
