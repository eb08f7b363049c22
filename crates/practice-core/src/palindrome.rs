//! Palindrome check over a normalized projection of a line of text.
//!
//! Normalization keeps only ASCII alphanumeric characters and folds them to
//! ASCII lowercase. Non-ASCII characters are dropped, so the result is the
//! same on every platform and locale.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_LINE_BYTES;

/// Outcome of a palindrome check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The normalized text reads the same in both directions.
    Palindrome,
    /// The normalized text differs from its reverse.
    NotPalindrome,
    /// Nothing was left after normalization.
    NothingToCheck,
}

/// Remove one trailing line terminator (`\n` or `\r\n`).
#[must_use]
pub fn strip_line_terminator(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(rest) => rest.strip_suffix(b"\r").unwrap_or(rest),
        None => line,
    }
}

/// Keep at most [`MAX_LINE_BYTES`] bytes.
#[must_use]
pub fn bounded(line: &[u8]) -> &[u8] {
    &line[..line.len().min(MAX_LINE_BYTES)]
}

/// Filter to ASCII alphanumerics and fold to lowercase.
///
/// Works on raw bytes, so text in any encoding is accepted; bytes outside
/// ASCII never survive.
///
/// # Example
/// ```
/// use practice_core::palindrome::normalize;
/// assert_eq!(normalize("A man, a plan, a canal: Panama"), "amanaplanacanalpanama");
/// ```
#[must_use]
pub fn normalize<T: AsRef<[u8]> + ?Sized>(text: &T) -> String {
    text.as_ref()
        .iter()
        .filter(|b| b.is_ascii_alphanumeric())
        .map(|b| char::from(b.to_ascii_lowercase()))
        .collect()
}

/// Two-cursor comparison from both ends toward the middle.
///
/// Stops at the first mismatching pair. An empty or single-element slice
/// is mirrored.
#[must_use]
pub fn is_mirrored(seq: &[u8]) -> bool {
    if seq.is_empty() {
        return true;
    }
    let (mut left, mut right) = (0, seq.len() - 1);
    while left < right {
        if seq[left] != seq[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}

/// Check one input line, given as text or raw bytes.
#[must_use]
pub fn check<T: AsRef<[u8]> + ?Sized>(line: &T) -> Verdict {
    let normalized = normalize(bounded(strip_line_terminator(line.as_ref())));
    if normalized.is_empty() {
        return Verdict::NothingToCheck;
    }
    if is_mirrored(normalized.as_bytes()) {
        Verdict::Palindrome
    } else {
        Verdict::NotPalindrome
    }
}
