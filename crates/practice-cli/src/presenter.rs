//! Console presenter for prompts and results.

use std::io::{self, Write};

use practice_core::{Grade, InterestInputs, InterestReport, PracticeError, Verdict};

use crate::output::{
    format_grade, format_interest, format_sequence_header, format_terms, rejection_message,
    verdict_message,
};

/// Writes prompts and result lines to a console stream.
pub struct ConsolePresenter<W> {
    out: W,
}

impl<W: Write> ConsolePresenter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write a prompt with no line break and flush it so it shows before
    /// the read blocks.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    pub fn present_sequence<I: IntoIterator<Item = u64>>(
        &mut self,
        count: usize,
        terms: I,
    ) -> io::Result<()> {
        writeln!(self.out, "{}", format_sequence_header(count))?;
        writeln!(self.out, "{}", format_terms(terms))
    }

    pub fn present_grade(&mut self, grade: Grade) -> io::Result<()> {
        writeln!(self.out, "{}", format_grade(grade))
    }

    pub fn present_verdict(&mut self, verdict: Verdict) -> io::Result<()> {
        writeln!(self.out, "{}", verdict_message(verdict))
    }

    pub fn present_interest(
        &mut self,
        inputs: &InterestInputs,
        report: &InterestReport,
    ) -> io::Result<()> {
        writeln!(self.out)?;
        for line in format_interest(inputs, report) {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    /// Report input the computation declined.
    pub fn present_rejection(&mut self, err: &PracticeError) -> io::Result<()> {
        writeln!(self.out, "{}", rejection_message(err))
    }

    /// Recover the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}
