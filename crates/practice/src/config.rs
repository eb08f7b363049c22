//! Command-line configuration shared by the practice programs.

use clap::{CommandFactory, FromArgMatches, Parser};

use crate::app::Program;

/// Practice console program. Values are read interactively from stdin.
#[derive(Parser, Debug)]
#[command(name = "practice", version, about)]
pub struct AppConfig {
    /// Log debug detail to stderr.
    #[arg(short, long, env = "PRACTICE_VERBOSE")]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// The clap command named and described for `program`.
    #[must_use]
    pub fn command_for(program: Program) -> clap::Command {
        <Self as CommandFactory>::command()
            .name(program.name())
            .bin_name(program.name())
            .about(program.about())
    }

    /// Parse CLI arguments for `program`, exiting on `--help`, `--version`,
    /// or a usage error.
    #[must_use]
    pub fn parse_for(program: Program) -> Self {
        Self::try_parse_from_for(program, std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse an explicit argument list for `program`.
    pub fn try_parse_from_for<I, T>(program: Program, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command_for(program).try_get_matches_from(args)?;
        <Self as FromArgMatches>::from_arg_matches(&matches)
    }
}
