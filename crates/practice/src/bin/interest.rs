//! Compute simple and compound interest.

use anyhow::Result;
use practice_lib::app::{self, Program};
use practice_lib::{config, logging};

fn main() -> Result<()> {
    let config = config::AppConfig::parse_for(Program::Interest);
    logging::init(config.verbose)?;
    app::run(Program::Interest, &config)
}
