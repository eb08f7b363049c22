//! Output formatting for every line the programs print.

use practice_core::{Grade, InterestInputs, InterestReport, PracticeError, Verdict};

pub const PROMPT_TERMS: &str = "Enter number of terms: ";
pub const PROMPT_MARKS: &str = "Enter percentage marks (0-100): ";
pub const PROMPT_TEXT: &str = "Enter a string (max 1023 chars): ";
pub const PROMPT_PRINCIPAL: &str = "Enter principal amount: ";
pub const PROMPT_RATE: &str = "Enter annual interest rate (percent): ";
pub const PROMPT_YEARS: &str = "Enter time (years): ";

/// Header printed before the terms.
#[must_use]
pub fn format_sequence_header(count: usize) -> String {
    format!("Fibonacci sequence ({count} terms):")
}

/// Terms joined by single spaces, no trailing separator.
#[must_use]
pub fn format_terms<I: IntoIterator<Item = u64>>(terms: I) -> String {
    terms
        .into_iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn format_grade(grade: Grade) -> String {
    format!("Grade: {grade}")
}

#[must_use]
pub fn verdict_message(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Palindrome => "The input is a palindrome.",
        Verdict::NotPalindrome => "The input is not a palindrome.",
        Verdict::NothingToCheck => "Empty or no alphanumeric characters to check.",
    }
}

/// User-facing message for a rejected input.
#[must_use]
pub fn rejection_message(err: &PracticeError) -> String {
    match err {
        PracticeError::InvalidTermCount(_) => "Please enter a positive integer.".to_string(),
        PracticeError::TooManyTerms(_) => {
            format!("Please enter at most {} terms.", practice_core::MAX_TERMS)
        }
        PracticeError::MarksOutOfRange(_) => format!(
            "Please enter marks between {} and {}.",
            practice_core::MIN_MARKS,
            practice_core::MAX_MARKS
        ),
    }
}

/// Fixed two-decimal rendering. Non-finite values print as `nan`, `inf`
/// and `-inf`.
#[must_use]
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    format!("{value:.2}")
}

/// The three result lines of the interest calculator.
#[must_use]
pub fn format_interest(inputs: &InterestInputs, report: &InterestReport) -> [String; 3] {
    [
        format!("Simple Interest: {}", format_amount(report.simple_interest)),
        format!(
            "Compound Interest: {}",
            format_amount(report.compound_interest)
        ),
        format!(
            "Amount after {} years (compound): {}",
            format_amount(inputs.years),
            format_amount(report.compound_amount)
        ),
    ]
}
