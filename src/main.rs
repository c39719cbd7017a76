// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod cue_reducer;
mod errors;
mod extractor;
mod fetch;
mod file_utils;
mod format_detector;
mod playlist_parser;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract a transcript from a subtitle playlist or SRT URL (default command)
    #[command(alias = "extract")]
    Extract(ExtractArgs),

    /// Generate shell completions for subgrab
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ExtractArgs {
    /// M3U8 playlist URL or SRT file URL
    #[arg(value_name = "URL")]
    url: String,

    /// Base name for the output files (defaults to a name derived from the URL)
    #[arg(short, long)]
    name: Option<String>,

    /// Output directory (overrides the configured one)
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subgrab - subtitle playlist transcript extractor
///
/// Downloads the VTT segments referenced by an M3U8 subtitle playlist (or a
/// standalone SRT file) and writes a merged raw subtitle document plus a
/// deduplicated plain-text transcript.
#[derive(Parser, Debug)]
#[command(name = "subgrab")]
#[command(version = "1.0.0")]
#[command(about = "Subtitle playlist transcript extractor")]
#[command(
    long_about = "subgrab downloads the WebVTT segments referenced by an M3U8 subtitle playlist
(or a standalone SRT file) and normalizes them into a merged raw subtitle
document and a deduplicated plain-text transcript.

EXAMPLES:
    subgrab https://cdn.example.com/captions/index.m3u8      # Extract with derived name
    subgrab -n lecture01 https://cdn.example.com/x.m3u8      # Name the output files
    subgrab -o transcripts https://example.com/subs.srt      # Pick an output directory
    subgrab -f https://cdn.example.com/captions/index.m3u8   # Overwrite existing outputs
    subgrab --log-level debug https://example.com/x.m3u8     # Verbose logging
    subgrab completions bash > subgrab.bash                  # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically."
)]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// M3U8 playlist URL or SRT file URL
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Base name for the output files (defaults to a name derived from the URL)
    #[arg(short, long)]
    name: Option<String>,

    /// Output directory (overrides the configured one)
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let emoji = Self::get_emoji_for_level(record.level());

            let color = match record.level() {
                Level::Error => "\x1B[1;31m",
                Level::Warn => "\x1B[1;33m",
                Level::Info => "\x1B[1;32m",
                Level::Debug => "\x1B[1;36m",
                Level::Trace => "\x1B[1;35m",
            };

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subgrab", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Extract(args)) => run_extract(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let url = cli
                .url
                .ok_or_else(|| anyhow!("URL is required when no subcommand is specified"))?;

            let extract_args = ExtractArgs {
                url,
                name: cli.name,
                output_dir: cli.output_dir,
                force_overwrite: cli.force_overwrite,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_extract(extract_args).await
        }
    }
}

async fn run_extract(options: ExtractArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(to_level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;
        config
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(output_dir) = &options.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(to_level_filter(&config.log_level));
    }

    let name = match &options.name {
        Some(name) => name.clone(),
        None => derive_output_name(&options.url),
    };

    // Create controller and run the extraction
    let controller = Controller::with_config(config)?;
    controller
        .run(&options.url, &name, options.force_overwrite)
        .await
}

fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

/// Derive an output base name from the URL's last path component
fn derive_output_name(url: &str) -> String {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let stem = without_query
        .rsplit('/')
        .next()
        .and_then(|segment| segment.split('.').next())
        .unwrap_or_default();

    if stem.is_empty() {
        "transcript".to_string()
    } else {
        stem.to_string()
    }
}
