//! Folio Studio - desktop entry point.

use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::{ColorChoice, Parser};
use folio_gui::app::App;
use folio_gui::cli::{Cli, LogFormatArg, LogLevelArg};
use folio_gui::component::LUCIDE_FONT_BYTES;
use folio_gui::constants::{APP_NAME, APP_VERSION};
use folio_gui::logging::{LogConfig, LogFormat, init_logging};
use folio_gui::state::Settings;
use iced::{Size, window};
use tracing::level_filters::LevelFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli)).context("failed to initialize logging")?;

    let settings_path = cli.config.clone().unwrap_or_else(Settings::config_path);
    let mut settings = Settings::load_from(&settings_path);
    if let Some(theme) = cli.theme {
        settings.display.theme_mode = theme.into();
    }
    if let Some(dir) = cli.assets_dir.clone() {
        settings.assets.directory = Some(dir);
    }
    let assets_dir = settings.assets.resolve_dir();

    tracing::info!(
        version = APP_VERSION,
        settings = %settings_path.display(),
        assets = %assets_dir.display(),
        "starting {APP_NAME}"
    );

    let boot = move || match App::new(settings.clone(), settings_path.clone(), assets_dir.clone())
    {
        Ok(booted) => booted,
        Err(error) => {
            tracing::error!(%error, "startup failed");
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1280.0, 860.0),
            min_size: Some(Size::new(420.0, 600.0)),
            ..Default::default()
        })
        .run()
        .context("application exited with an error")
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
