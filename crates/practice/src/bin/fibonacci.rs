//! Print the first N Fibonacci terms.

use anyhow::Result;
use practice_lib::app::{self, Program};
use practice_lib::{config, logging};

fn main() -> Result<()> {
    let config = config::AppConfig::parse_for(Program::Fibonacci);
    logging::init(config.verbose)?;
    app::run(Program::Fibonacci, &config)
}
