//! Golden file integration tests.
//!
//! Reads tests/testdata/practice_golden.json and checks the core
//! computations and full console transcripts against known values.

use serde::Deserialize;

use practice_cli::output::format_interest;
use practice_core::grade::{classify, Grade};
use practice_core::interest::{compute, InterestInputs};
use practice_core::palindrome::{check, normalize, Verdict};
use practice_core::sequence::fibonacci_terms;
use practice_lib::app::{execute, Program};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    fibonacci: Vec<FibEntry>,
    grades: Vec<GradeEntry>,
    palindromes: Vec<PalindromeEntry>,
    interest: Vec<InterestEntry>,
    transcripts: Vec<TranscriptEntry>,
}

#[derive(Deserialize)]
struct FibEntry {
    count: i64,
    #[serde(default)]
    terms: Option<Vec<u64>>,
}

#[derive(Deserialize)]
struct GradeEntry {
    marks: i64,
    #[serde(default)]
    grade: Option<Grade>,
}

#[derive(Deserialize)]
struct PalindromeEntry {
    text: String,
    normalized: String,
    verdict: Verdict,
}

#[derive(Deserialize)]
struct InterestEntry {
    #[serde(flatten)]
    inputs: InterestInputs,
    simple: String,
    compound_interest: String,
    amount: String,
}

#[derive(Deserialize)]
struct TranscriptEntry {
    program: String,
    stdin: String,
    stdout: String,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/practice_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn program_named(name: &str) -> Program {
    match name {
        "fibonacci" => Program::Fibonacci,
        "grade" => Program::Grade,
        "palindrome" => Program::Palindrome,
        "interest" => Program::Interest,
        other => panic!("unknown program {other}"),
    }
}

// ---------------------------------------------------------------------------
// Golden: core computations
// ---------------------------------------------------------------------------

#[test]
fn golden_fibonacci() {
    for entry in &load_golden_data().fibonacci {
        let result = fibonacci_terms(entry.count).map(|seq| seq.collect::<Vec<u64>>());
        match &entry.terms {
            Some(expected) => assert_eq!(
                result.as_ref().ok(),
                Some(expected),
                "terms mismatch for count={}",
                entry.count
            ),
            None => assert!(result.is_err(), "count={} should be rejected", entry.count),
        }
    }
}

#[test]
fn golden_grades() {
    for entry in &load_golden_data().grades {
        assert_eq!(
            classify(entry.marks).ok(),
            entry.grade,
            "grade mismatch for marks={}",
            entry.marks
        );
    }
}

#[test]
fn golden_palindromes() {
    for entry in &load_golden_data().palindromes {
        assert_eq!(normalize(&entry.text), entry.normalized, "normalize({:?})", entry.text);
        assert_eq!(check(&entry.text), entry.verdict, "check({:?})", entry.text);
    }
}

#[test]
fn golden_interest() {
    for entry in &load_golden_data().interest {
        let report = compute(&entry.inputs);
        let [simple, compound, amount] = format_interest(&entry.inputs, &report);
        assert!(simple.ends_with(&entry.simple), "{simple} vs {}", entry.simple);
        assert!(
            compound.ends_with(&entry.compound_interest),
            "{compound} vs {}",
            entry.compound_interest
        );
        assert!(amount.ends_with(&entry.amount), "{amount} vs {}", entry.amount);
    }
}

// ---------------------------------------------------------------------------
// Golden: full console transcripts
// ---------------------------------------------------------------------------

#[test]
fn golden_transcripts() {
    for entry in &load_golden_data().transcripts {
        let mut out = Vec::new();
        execute(program_named(&entry.program), entry.stdin.as_bytes(), &mut out)
            .expect("transcript input should be readable");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            entry.stdout,
            "{} transcript for {:?}",
            entry.program,
            entry.stdin
        );
    }
}
