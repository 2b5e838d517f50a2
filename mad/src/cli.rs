//! CLI argument parsing for mad

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mad")]
#[command(author, version, about = "Mutual recursion trace demo", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Value to start the recursion from (default: 6, max: 4096)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(..=i64::from(crate::MAX_START)))]
    pub start: Option<u32>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR, OFF)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args() {
        let cli = Cli::try_parse_from(["mad"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.start.is_none());
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_start_and_log_level() {
        let cli = Cli::try_parse_from(["mad", "-s", "3", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.start, Some(3));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_start_upper_bound() {
        let cli = Cli::try_parse_from(["mad", "--start", "4096"]).unwrap();
        assert_eq!(cli.start, Some(crate::MAX_START));
        assert!(Cli::try_parse_from(["mad", "--start", "4097"]).is_err());
        assert!(Cli::try_parse_from(["mad", "--start", "4294967295"]).is_err());
    }

    #[test]
    fn test_negative_start_rejected() {
        assert!(Cli::try_parse_from(["mad", "--start", "-1"]).is_err());
    }
}
