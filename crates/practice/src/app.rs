//! Application entry point and dispatch.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use practice_cli::completion::generate_completion;
use practice_cli::output::{
    PROMPT_MARKS, PROMPT_PRINCIPAL, PROMPT_RATE, PROMPT_TERMS, PROMPT_TEXT, PROMPT_YEARS,
};
use practice_cli::{ConsolePresenter, InputError, TokenReader};
use practice_core::{
    check, classify, compute, exit_codes, fibonacci_terms, InterestInputs, MAX_LINE_BYTES,
};

use crate::config::AppConfig;
use crate::errors::handle_error;

/// The four practice programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    Fibonacci,
    Grade,
    Palindrome,
    Interest,
}

impl Program {
    /// Binary name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Fibonacci => "fibonacci",
            Self::Grade => "grade",
            Self::Palindrome => "palindrome",
            Self::Interest => "interest",
        }
    }

    /// One-line description for `--help`.
    #[must_use]
    pub fn about(self) -> &'static str {
        match self {
            Self::Fibonacci => "Print the first N terms of the Fibonacci sequence",
            Self::Grade => "Convert percentage marks to a letter grade",
            Self::Palindrome => "Check whether a line of text is a palindrome",
            Self::Interest => "Compute simple and compound interest",
        }
    }
}

/// How a run ended when no input error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The result was printed.
    Completed,
    /// The input was out of domain and a message was printed instead.
    Rejected,
}

/// Run `program` against the process console.
pub fn run(program: Program, config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = AppConfig::command_for(program);
        generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match execute(program, stdin.lock(), stdout.lock()) {
        Ok(outcome) => {
            tracing::debug!(program = program.name(), ?outcome, "run finished");
            Ok(())
        }
        Err(err) if handle_error(&err) == exit_codes::SUCCESS => {
            // Unreadable input ends the run quietly on stdout.
            tracing::warn!(program = program.name(), "{err}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Run `program` reading from `input` and writing to `out`.
pub fn execute<R: BufRead, W: Write>(
    program: Program,
    input: R,
    out: W,
) -> Result<Outcome, InputError> {
    let mut reader = TokenReader::new(input);
    let mut presenter = ConsolePresenter::new(out);
    match program {
        Program::Fibonacci => run_fibonacci(&mut reader, &mut presenter),
        Program::Grade => run_grade(&mut reader, &mut presenter),
        Program::Palindrome => run_palindrome(&mut reader, &mut presenter),
        Program::Interest => run_interest(&mut reader, &mut presenter),
    }
}

/// Read a term count and print that many Fibonacci terms.
pub fn run_fibonacci<R: BufRead, W: Write>(
    reader: &mut TokenReader<R>,
    presenter: &mut ConsolePresenter<W>,
) -> Result<Outcome, InputError> {
    presenter.prompt(PROMPT_TERMS)?;
    let count = reader.next_i64()?;
    tracing::debug!(count, "term count read");

    match fibonacci_terms(count) {
        Ok(terms) => {
            presenter.present_sequence(terms.len(), terms)?;
            Ok(Outcome::Completed)
        }
        Err(err) => {
            tracing::debug!(%err, "term count rejected");
            presenter.present_rejection(&err)?;
            Ok(Outcome::Rejected)
        }
    }
}

/// Read percentage marks and print the letter grade.
pub fn run_grade<R: BufRead, W: Write>(
    reader: &mut TokenReader<R>,
    presenter: &mut ConsolePresenter<W>,
) -> Result<Outcome, InputError> {
    presenter.prompt(PROMPT_MARKS)?;
    let marks = reader.next_i64()?;

    match classify(marks) {
        Ok(grade) => {
            tracing::debug!(marks, %grade, "marks classified");
            presenter.present_grade(grade)?;
            Ok(Outcome::Completed)
        }
        Err(err) => {
            tracing::debug!(%err, "marks rejected");
            presenter.present_rejection(&err)?;
            Ok(Outcome::Rejected)
        }
    }
}

/// Read one line of text and print the palindrome verdict.
pub fn run_palindrome<R: BufRead, W: Write>(
    reader: &mut TokenReader<R>,
    presenter: &mut ConsolePresenter<W>,
) -> Result<Outcome, InputError> {
    presenter.prompt(PROMPT_TEXT)?;
    // Room for the terminator on a line that fills the bound exactly.
    let line = reader.read_line(MAX_LINE_BYTES + 2)?.unwrap_or_default();
    let verdict = check(&line);
    tracing::debug!(?verdict, bytes = line.len(), "line checked");
    presenter.present_verdict(verdict)?;
    Ok(Outcome::Completed)
}

/// Read principal, rate, and time and print the interest figures.
pub fn run_interest<R: BufRead, W: Write>(
    reader: &mut TokenReader<R>,
    presenter: &mut ConsolePresenter<W>,
) -> Result<Outcome, InputError> {
    presenter.prompt(PROMPT_PRINCIPAL)?;
    let principal = reader.next_f64()?;
    presenter.prompt(PROMPT_RATE)?;
    let rate = reader.next_f64()?;
    presenter.prompt(PROMPT_YEARS)?;
    let years = reader.next_f64()?;

    let inputs = InterestInputs {
        principal,
        rate,
        years,
    };
    let report = compute(&inputs);
    tracing::debug!(?inputs, ?report, "interest computed");
    presenter.present_interest(&inputs, &report)?;
    Ok(Outcome::Completed)
}
