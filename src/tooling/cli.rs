//! CLI Tooling
//!
//! Command-line interface: one or more directory arguments plus toggles for
//! recursion and hidden entries. Flags layer over the loaded configuration.

use crate::assets::Assets;
use crate::config::{ConfigLoader, IndexConfig};
use crate::error::IndexError;
use crate::icons::IconTable;
use crate::logging::LoggingConfig;
use crate::report::{format_report_json, format_report_text, RunReport};
use crate::walker::{DirectoryWalker, WalkOptions};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// static-indexes - write index.html listings into directory trees
#[derive(Parser, Debug)]
#[command(name = "static-indexes")]
#[command(about = "Generate static index.html directory listings")]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Directories to index
    #[arg(required = true)]
    pub dirs: Vec<PathBuf>,

    /// Descend into subdirectories
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Include hidden dotfiles
    #[arg(short = 'h', long)]
    pub hidden: bool,

    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Enable verbose logging (debug level)
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

impl Cli {
    /// Overlay the logging flags onto `base`.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(ref level) = self.log_level {
            config.level = level.clone();
        }
        if let Some(ref format) = self.log_format {
            config.format = format.clone();
        }
        if let Some(ref output) = self.log_output {
            config.output = output.clone();
        }
        if let Some(ref file) = self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

/// Loaded configuration plus the read-only tables shared by every directory.
pub struct CliContext {
    config: IndexConfig,
    assets: Assets,
    icons: IconTable,
}

impl CliContext {
    /// Load configuration (global file, optional explicit file, environment).
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, IndexError> {
        let config = ConfigLoader::load_with(config_path.as_deref())?;
        Self::from_config(config)
    }

    /// Build the context from an already-loaded configuration.
    pub fn from_config(config: IndexConfig) -> Result<Self, IndexError> {
        let assets = Assets::load(&config.assets)?;
        let icons = IconTable::with_overrides(&config.icons)?;
        Ok(Self {
            config,
            assets,
            icons,
        })
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Walk options after applying the CLI toggles. Flags only switch toggles on.
    pub fn walk_options(&self, cli: &Cli) -> WalkOptions {
        let mut options = WalkOptions::from(&self.config);
        options.recursive |= cli.recursive;
        options.include_hidden |= cli.hidden;
        options
    }

    /// Run the generation over every directory argument and format the report.
    pub fn execute(&self, cli: &Cli) -> Result<String, IndexError> {
        let json = match cli.format.as_str() {
            "json" => true,
            "text" => false,
            other => {
                return Err(IndexError::ConfigError(format!(
                    "Invalid format: {} (must be 'text' or 'json')",
                    other
                )))
            }
        };
        let report = self.run(cli)?;
        if json {
            format_report_json(&report)
        } else {
            Ok(format_report_text(&report))
        }
    }

    /// Run the generation and return the raw report.
    pub fn run(&self, cli: &Cli) -> Result<RunReport, IndexError> {
        let started = Instant::now();
        let walker = DirectoryWalker::new(self.walk_options(cli), &self.assets, &self.icons);
        let report = walker.run(cli.dirs.as_slice())?;
        info!(
            directories = report.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Generation finished"
        );
        Ok(report)
    }
}
