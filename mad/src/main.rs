use std::io::{self, BufWriter};

use clap::Parser;
use eyre::{Context, Result};
use log::{LevelFilter, info};

use madness::Session;
use madness::cli::Cli;
use madness::config::Config;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: --log-level > config file > warn; the environment is not consulted
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);

    if let Some(s) = cli_log_level.or(config_log_level) {
        match s.parse::<LevelFilter>() {
            Ok(level) => {
                builder.filter_level(level);
            }
            Err(_) => eprintln!("Warning: Unknown log-level '{}', keeping default", s),
        }
    }

    builder.try_init().context("Failed to initialize logger")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    let start = cli.start.unwrap_or(config.start);
    info!("mad starting with {}", start);

    let stdout = io::stdout();
    let mut session = Session::new(BufWriter::new(stdout.lock()));
    session.start(i64::from(start)).context("Failed to write trace")?;
    session.finish().context("Failed to flush trace")?;

    info!("mad finished");
    Ok(())
}
