//! Convert percentage marks to a letter grade.

use anyhow::Result;
use practice_lib::app::{self, Program};
use practice_lib::{config, logging};

fn main() -> Result<()> {
    let config = config::AppConfig::parse_for(Program::Grade);
    logging::init(config.verbose)?;
    app::run(Program::Grade, &config)
}
