//! Console input scanning.
//!
//! Numbers are read as whitespace-separated tokens, so several values may
//! share a line or be spread over many. Text is read one line at a time.
//! Input is handled as raw bytes: text in any encoding is accepted, and a
//! token that is not valid UTF-8 is a parse failure like any other bad token.

use std::collections::VecDeque;
use std::io::{self, BufRead, Read};
use std::str::FromStr;

/// Failure while reading a value from the console.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// A token did not parse as the requested type.
    #[error("could not parse {token:?} as {expected}")]
    Parse {
        token: String,
        expected: &'static str,
    },

    /// Input ended before a value was read.
    #[error("input ended before a value was read")]
    EndOfInput,

    /// Reading the console failed.
    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Token and line reader over any buffered source.
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<Vec<u8>>,
}

impl<R: BufRead> TokenReader<R> {
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
        }
    }

    /// Next whitespace-separated token, reading more lines as needed.
    pub fn next_token(&mut self) -> Result<Vec<u8>, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = Vec::new();
            if self.inner.read_until(b'\n', &mut line)? == 0 {
                return Err(InputError::EndOfInput);
            }
            self.pending.extend(
                line.split(u8::is_ascii_whitespace)
                    .filter(|t| !t.is_empty())
                    .map(<[u8]>::to_vec),
            );
        }
    }

    /// Parse the next token as `T`.
    pub fn parse_next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, InputError> {
        let token = self.next_token()?;
        let parsed = std::str::from_utf8(&token)
            .ok()
            .and_then(|text| text.parse::<T>().ok());
        parsed.ok_or_else(|| {
            let token = String::from_utf8_lossy(&token).into_owned();
            tracing::debug!(%token, expected, "token rejected");
            InputError::Parse { token, expected }
        })
    }

    /// Next integer token.
    pub fn next_i64(&mut self) -> Result<i64, InputError> {
        self.parse_next("an integer")
    }

    /// Next real-number token. `NaN` is rejected.
    pub fn next_f64(&mut self) -> Result<f64, InputError> {
        let value: f64 = self.parse_next("a number")?;
        if value.is_nan() {
            return Err(InputError::Parse {
                token: value.to_string(),
                expected: "a number",
            });
        }
        Ok(value)
    }

    /// Read one raw line, terminator included, keeping at most `limit`
    /// bytes. The rest of an overlong line is consumed and dropped.
    /// `None` at end of input.
    ///
    /// Tokens left over from a partly consumed line are discarded.
    pub fn read_line(&mut self, limit: usize) -> Result<Option<Vec<u8>>, InputError> {
        self.pending.clear();
        let mut line = Vec::new();
        let limit_u64 = u64::try_from(limit).unwrap_or(u64::MAX);
        if (&mut self.inner).take(limit_u64).read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        if !line.ends_with(b"\n") {
            let dropped = self.skip_line()?;
            if dropped > 0 {
                tracing::debug!(kept = line.len(), dropped, "overlong line truncated");
            }
        }
        Ok(Some(line))
    }

    /// Consume input up to and including the next newline without
    /// buffering it. Returns the number of bytes dropped.
    fn skip_line(&mut self) -> io::Result<usize> {
        let mut dropped = 0;
        loop {
            let (used, done) = {
                let buf = match self.inner.fill_buf() {
                    Ok(buf) => buf,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if buf.is_empty() {
                    return Ok(dropped);
                }
                match buf.iter().position(|&b| b == b'\n') {
                    Some(i) => (i + 1, true),
                    None => (buf.len(), false),
                }
            };
            self.inner.consume(used);
            dropped += used;
            if done {
                return Ok(dropped);
            }
        }
    }
}
