//! # practice-cli
//!
//! Console input scanning, output formatting, and shell completion for the
//! practice programs.

pub mod completion;
pub mod input;
pub mod output;
pub mod presenter;

pub use input::{InputError, TokenReader};
pub use presenter::ConsolePresenter;
