//! Finite Fibonacci sequence over 64-bit terms.

use std::iter::FusedIterator;

use crate::constants::MAX_TERMS;
use crate::error::PracticeError;

/// Lazy iterator over the first `count` Fibonacci terms.
///
/// Yields 0, 1, 1, 2, 3, ... and stops after the requested number of
/// terms. It cannot be restarted; build a new one with [`fibonacci_terms`].
///
/// # Example
/// ```
/// use practice_core::sequence::fibonacci_terms;
/// let terms: Vec<u64> = fibonacci_terms(7).unwrap().collect();
/// assert_eq!(terms, [0, 1, 1, 2, 3, 5, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct FibSequence {
    current: u64,
    next: Option<u64>,
    remaining: u64,
}

impl FibSequence {
    fn with_count(count: u64) -> Self {
        Self {
            current: 0,
            next: Some(1),
            remaining: count,
        }
    }
}

/// Build the sequence of the first `count` terms.
///
/// # Errors
///
/// [`PracticeError::InvalidTermCount`] when `count <= 0`, and
/// [`PracticeError::TooManyTerms`] when the last term would not fit in a `u64`.
pub fn fibonacci_terms(count: i64) -> Result<FibSequence, PracticeError> {
    let Ok(count_u) = u64::try_from(count) else {
        return Err(PracticeError::InvalidTermCount(count));
    };
    if count_u == 0 {
        return Err(PracticeError::InvalidTermCount(count));
    }
    if count_u > MAX_TERMS {
        return Err(PracticeError::TooManyTerms(count));
    }
    tracing::trace!(count, "building fibonacci sequence");
    Ok(FibSequence::with_count(count_u))
}

impl Iterator for FibSequence {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let term = self.current;
        if self.remaining > 0 {
            // Only advance while another term is owed, so the final
            // addition never runs past the last representable term.
            let next = self.next?;
            self.next = term.checked_add(next);
            self.current = next;
        }
        Some(term)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for FibSequence {}

impl FusedIterator for FibSequence {}
