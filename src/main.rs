// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};
use std::io::Write;
use std::path::PathBuf;

use lexibridge::app_config::{self, Config, DEFAULT_CONFIG_FILE};
use lexibridge::app_controller::{BridgeInput, BuildRequest, Controller};

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
    /// Build a Spanish-Hebrew dictionary from lexical records
    Build(BuildArgs),

    /// Generate shell completions for lexibridge
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Spanish records (JSON or JSON lines file, or a directory of them)
    #[arg(long, value_name = "PATH")]
    spanish: PathBuf,

    /// Hebrew records (JSON or JSON lines file, or a directory of them)
    #[arg(long, value_name = "PATH")]
    hebrew: PathBuf,

    /// Bridge-language records as LANG=PATH (repeatable, lookup order)
    #[arg(short, long, value_name = "LANG=PATH")]
    bridge: Vec<BridgeInput>,

    /// Parallel Spanish-Hebrew sentence corpus
    #[arg(short, long, value_name = "PATH")]
    examples: Option<PathBuf>,

    /// Dictionary output file
    #[arg(short, long, value_name = "PATH", default_value = "dictionary.json")]
    output: PathBuf,

    /// Quality report output file
    #[arg(short, long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Force overwrite of an existing dictionary
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Minimum fuzzy score (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    fuzzy_threshold: Option<u8>,

    /// Skip fuzzy definition matching
    #[arg(long)]
    no_fuzzy: bool,

    /// Skip bridge-language triangulation
    #[arg(long)]
    no_triangulation: bool,

    /// Hide the progress bar
    #[arg(long)]
    quiet: bool,
}

/// LexiBridge - Spanish-Hebrew dictionary builder
///
/// Aligns Spanish and Hebrew lexical records through direct translations,
/// bridge languages and definition similarity, then emits a structured
/// bilingual dictionary.
#[derive(Parser, Debug)]
#[command(name = "lexibridge")]
#[command(version)]
#[command(about = "Spanish-Hebrew dictionary builder")]
#[command(long_about = "LexiBridge aligns Spanish and Hebrew lexical records and writes a bilingual dictionary.

EXAMPLES:
    lexibridge build --spanish es.jsonl --hebrew he.jsonl
    lexibridge build --spanish es.jsonl --hebrew he.jsonl -b en=en.jsonl -b fr=fr.jsonl
    lexibridge build --spanish es/ --hebrew he/ -e tatoeba.jsonl -r report.json -f
    lexibridge build --spanish es.jsonl --hebrew he.jsonl --fuzzy-threshold 85
    lexibridge completions bash > lexibridge.bash

CONFIGURATION:
    Configuration is stored in lexibridge.json by default. You can specify a
    different config file with --config-path. If the config file doesn't exist,
    a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
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

    // @returns: ANSI colour for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
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
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
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
    // Start at trace so the config level can narrow it later
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "lexibridge", &mut std::io::stdout());
            Ok(())
        }
        Commands::Build(args) => run_build(args),
    }
}

fn run_build(options: BuildArgs) -> Result<()> {
    // Apply the command line level before the config is read
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&options.config_path)
        .with_context(|| format!("Failed to load config file: {}", options.config_path))?;

    // Override config with CLI options if provided
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
    if let Some(threshold) = options.fuzzy_threshold {
        config.alignment.fuzzy_threshold = threshold;
    }
    if options.no_fuzzy {
        config.alignment.enable_fuzzy = false;
    }
    if options.no_triangulation {
        config.alignment.enable_triangulation = false;
    }

    config.validate().context("Configuration validation failed")?;
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;
    let request = BuildRequest {
        spanish: options.spanish,
        hebrew: options.hebrew,
        bridge: options.bridge,
        examples: options.examples,
        output: options.output,
        report: options.report,
        force_overwrite: options.force_overwrite,
        show_progress: !options.quiet,
    };

    if let Some(result) = controller.run(&request)? {
        info!(
            "Success: {} entries, {} senses in {:.1}s",
            result.entries.len(),
            result.sense_count(),
            result.duration.as_secs_f64()
        );
    }

    Ok(())
}
