//! Property-based tests for the practice computations.

use proptest::prelude::*;

use practice_core::grade::{bucket, classify, Grade};
use practice_core::interest::{compute, InterestInputs};
use practice_core::palindrome::{check, is_mirrored, normalize, Verdict};
use practice_core::sequence::fibonacci_terms;
use practice_core::PracticeError;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every term after the first two is the sum of the two before it.
    #[test]
    fn fibonacci_recurrence(count in 3i64..=94) {
        let terms: Vec<u64> = fibonacci_terms(count).unwrap().collect();
        prop_assert_eq!(terms[0], 0);
        prop_assert_eq!(terms[1], 1);
        for i in 2..terms.len() {
            prop_assert_eq!(terms[i], terms[i - 1] + terms[i - 2], "term {} breaks recurrence", i + 1);
        }
    }

    /// The sequence yields exactly the requested number of terms.
    #[test]
    fn fibonacci_exact_length(count in 1i64..=94) {
        let seq = fibonacci_terms(count).unwrap();
        prop_assert_eq!(seq.len() as i64, count);
        prop_assert_eq!(seq.count() as i64, count);
    }

    /// Non-positive counts are always rejected.
    #[test]
    fn fibonacci_rejects_non_positive(count in i64::MIN..=0) {
        prop_assert_eq!(fibonacci_terms(count).unwrap_err(), PracticeError::InvalidTermCount(count));
    }

    /// Normalizing twice equals normalizing once.
    #[test]
    fn normalize_idempotent(text in ".{0,200}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Normalized output holds only lowercase ASCII letters and digits.
    #[test]
    fn normalize_output_alphabet(text in ".{0,200}") {
        prop_assert!(normalize(&text).chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    /// Arbitrary bytes, valid UTF-8 or not, normalize to the same alphabet
    /// and only report nothing to check when no alphanumeric survives.
    #[test]
    fn any_bytes_are_checked(bytes in proptest::collection::vec(any::<u8>(), 0..300)) {
        let normalized = normalize(&bytes);
        prop_assert!(normalized.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
        prop_assert_eq!(check(&bytes) == Verdict::NothingToCheck, normalized.is_empty());
    }

    /// A line and its reverse always get the same verdict.
    #[test]
    fn verdict_symmetric_under_reversal(text in "[a-zA-Z0-9 ,.!?]{0,100}") {
        let reversed: String = text.chars().rev().collect();
        prop_assert_eq!(check(&text), check(&reversed));
    }

    /// Any string followed by its reverse is a palindrome once it holds an alphanumeric.
    #[test]
    fn mirrored_text_is_palindrome(text in "[a-zA-Z0-9 ,.]{1,100}") {
        let mirrored: String = text.chars().chain(text.chars().rev()).collect();
        let expected = if normalize(&text).is_empty() {
            Verdict::NothingToCheck
        } else {
            Verdict::Palindrome
        };
        prop_assert_eq!(check(&mirrored), expected);
        prop_assert!(is_mirrored(normalize(&mirrored).as_bytes()));
    }

    /// Higher marks never earn a lower grade.
    #[test]
    fn grade_monotonic(a in 0i64..=100, b in 0i64..=100) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        // Grade orders A < B < ... < F, so a better grade compares smaller.
        prop_assert!(classify(hi).unwrap() <= classify(lo).unwrap());
    }

    /// The grade depends only on the decile bucket.
    #[test]
    fn grade_depends_on_bucket(marks in 0i64..=100) {
        prop_assert_eq!(classify(marks).unwrap(), Grade::from_bucket(bucket(marks)));
    }

    /// Marks outside 0..=100 are rejected.
    #[test]
    fn grade_rejects_out_of_range(marks in prop_oneof![i64::MIN..0i64, 101i64..=i64::MAX]) {
        prop_assert_eq!(classify(marks), Err(PracticeError::MarksOutOfRange(marks)));
    }

    /// Compound interest is always the compound amount less the principal.
    #[test]
    fn compound_interest_identity(
        principal in -1.0e6f64..1.0e6,
        rate in -50.0f64..50.0,
        years in 0.0f64..30.0,
    ) {
        let report = compute(&InterestInputs { principal, rate, years });
        prop_assert_eq!(report.compound_interest, report.compound_amount - principal);
    }

    /// Simple interest scales linearly with time.
    #[test]
    fn simple_interest_linear_in_time(
        principal in 0.0f64..1.0e6,
        rate in 0.0f64..50.0,
        years in 0.0f64..30.0,
    ) {
        let one = compute(&InterestInputs { principal, rate, years });
        let two = compute(&InterestInputs { principal, rate, years: years * 2.0 });
        let tolerance = 1e-9 * (1.0 + one.simple_interest.abs());
        prop_assert!((two.simple_interest - 2.0 * one.simple_interest).abs() <= tolerance);
    }
}

/// The examples listed for each program.
#[test]
fn documented_examples() {
    let five: Vec<u64> = fibonacci_terms(5).unwrap().collect();
    assert_eq!(five, [0, 1, 1, 2, 3]);
    assert_eq!(classify(95), Ok(Grade::A));
    assert_eq!(classify(59), Ok(Grade::F));
    assert_eq!(check("A man, a plan, a canal: Panama"), Verdict::Palindrome);
    assert_eq!(check("hello"), Verdict::NotPalindrome);
    assert_eq!(check("!!!"), Verdict::NothingToCheck);
}
