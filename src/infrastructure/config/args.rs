use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Screen selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScreenArg {
    /// Random joke and picture.
    Random,
    /// All jokes.
    Jokes,
    /// Add-joke form.
    Add,
}

#[derive(Debug, Parser)]
#[command(
    name = "dadjokes",
    version,
    about = "A terminal client for the Dad Jokes API",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the jokes API.
    #[arg(long, value_name = "URL", env = "DADJOKES_API_URL")]
    pub api_url: Option<String>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Enable desktop notifications.
    #[arg(long)]
    pub desktop_notifications: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Print a static rendering of one screen and exit.
    #[arg(long, value_enum, value_name = "SCREEN")]
    pub snapshot: Option<ScreenArg>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_arg() {
        let args = CliArgs::parse_from(["dadjokes", "--snapshot", "jokes"]);
        assert_eq!(args.snapshot, Some(ScreenArg::Jokes));
    }

    #[test]
    fn test_defaults_are_unset() {
        let args = CliArgs::parse_from(["dadjokes"]);
        assert!(args.snapshot.is_none());
        assert!(args.log_level.is_none());
    }
}
