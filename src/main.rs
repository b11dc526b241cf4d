// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};

use crate::app_config::Config;
use crate::file_utils::ScriptFormat;
use app_controller::Controller;

mod analysis;
mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod finaldraft;
mod heuristic;
mod screenplay;

/// CLI Wrapper for ScriptFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliScriptFormat {
    Fdx,
    Txt,
}

impl From<CliScriptFormat> for ScriptFormat {
    fn from(cli_format: CliScriptFormat) -> Self {
        match cli_format {
            CliScriptFormat::Fdx => ScriptFormat::FinalDraft,
            CliScriptFormat::Txt => ScriptFormat::PlainText,
        }
    }
}

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
    /// Extract screenplay structure from a script file (default command)
    #[command(alias = "extract")]
    Extract(ExtractArgs),

    /// Generate shell completions for fadein
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ExtractArgs {
    /// Input script file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output path for the JSON report (single-file mode only)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input format override (otherwise chosen by file extension)
    #[arg(short = 'F', long, value_enum)]
    format: Option<CliScriptFormat>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "fadein.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// fadein - screenplay structure extractor
///
/// Converts screenplay files into a canonical sequence of typed elements
/// (scene headings, character cues, parentheticals, dialogue, dual dialogue,
/// action) plus derived views: character roster, scene list, and emphasized
/// terms from action text.
#[derive(Parser, Debug)]
#[command(name = "fadein")]
#[command(version = "0.1.0")]
#[command(about = "Screenplay structure extractor")]
#[command(long_about = "fadein extracts structured screenplay content from script files.

Final Draft (.fdx) documents are walked as tagged markup; plain-text scripts
recovered from page layouts (.txt) are reconstructed with a heuristic line
classifier. Both produce the same JSON report.

EXAMPLES:
    fadein script.fdx                   # Extract to script.json
    fadein script.txt -o report.json    # Extract to an explicit output path
    fadein -F txt recovered.text        # Force the plain-text front end
    fadein -f script.fdx                # Overwrite an existing report
    fadein /scripts/                    # Process a whole directory
    fadein --log-level debug draft.txt  # Show per-rule classification decisions
    fadein completions bash > fadein.bash

CONFIGURATION:
    Configuration is stored in fadein.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, defaults are used.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input script file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output path for the JSON report (single-file mode only)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input format override (otherwise chosen by file extension)
    #[arg(short = 'F', long, value_enum)]
    format: Option<CliScriptFormat>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "fadein.json")]
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

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "fadein", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Extract(args)) => run_extract(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let extract_args = ExtractArgs {
                input_path,
                output: cli.output,
                format: cli.format,
                force_overwrite: cli.force_overwrite,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_extract(extract_args)
        }
    }
}

fn run_extract(options: ExtractArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    // Load configuration if present, otherwise run with defaults
    let config_path = &options.config_path;
    let mut config = if std::path::Path::new(config_path).exists() {
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config: {}", config_path))?
    } else {
        warn!(
            "Config file not found at '{}', using default configuration.",
            config_path
        );
        Config::default()
    };

    // Update log level in config if specified via command line
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;

    if options.input_path.is_dir() {
        if options.output.is_some() {
            return Err(anyhow!(
                "--output cannot be combined with a directory input"
            ));
        }
        controller.run_folder(&options.input_path, options.force_overwrite)?;
    } else {
        controller.run(
            &options.input_path,
            options.output.as_deref(),
            options.format.map(Into::into),
            options.force_overwrite,
        )?;
    }

    Ok(())
}
