//! Command line arguments for Folio Studio.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use crate::theme::ThemeMode;

#[derive(Parser)]
#[command(
    name = "folio-studio",
    version,
    about = "Folio Studio - a portfolio and research lab as a desktop app",
    long_about = "Browse the portfolio: biography, tech stack, project showcase, \
                  and the research lab.\n\n\
                  Artwork is read from a local assets directory; links open in \
                  the system browser."
)]
pub struct Cli {
    /// Settings file to use instead of the platform config directory.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the portfolio artwork (overrides settings).
    #[arg(long = "assets-dir", value_name = "DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Theme for this run (overrides settings).
    #[arg(long = "theme", value_enum)]
    pub theme: Option<ThemeArg>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI theme choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    System,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
            ThemeArg::System => Self::System,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "folio-studio",
            "--assets-dir",
            "art",
            "--theme",
            "dark",
            "--log-format",
            "json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.assets_dir, Some(PathBuf::from("art")));
        assert_eq!(cli.theme, Some(ThemeArg::Dark));
        assert_eq!(cli.log_format, LogFormatArg::Json);
        assert!(cli.verbosity.is_present());
        assert!(cli.config.is_none());
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["folio-studio"]).unwrap();
        assert_eq!(cli.log_format, LogFormatArg::Pretty);
        assert!(cli.log_level.is_none());
        assert!(!cli.verbosity.is_present());
    }
}
