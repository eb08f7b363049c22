//! Exit codes for console input failures.

use practice_cli::InputError;
use practice_core::exit_codes;

/// Map an input failure to the process exit code.
///
/// Unparsable or missing input is not an error exit: the run stops and the
/// process still reports success. Only console I/O failures are non-zero.
pub fn handle_error(err: &InputError) -> i32 {
    match err {
        InputError::Parse { .. } | InputError::EndOfInput => exit_codes::SUCCESS,
        InputError::Io(_) => exit_codes::ERROR_GENERIC,
    }
}
