//! Check whether a line of text is a palindrome.

use anyhow::Result;
use practice_lib::app::{self, Program};
use practice_lib::{config, logging};

fn main() -> Result<()> {
    let config = config::AppConfig::parse_for(Program::Palindrome);
    logging::init(config.verbose)?;
    app::run(Program::Palindrome, &config)
}
