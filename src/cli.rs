// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `sysbak`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "sysbak",
    version,
    about = "Run all configured backup jobs concurrently and report failures.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the settings file (JSON, or TOML with a `.toml` extension).
    ///
    /// Default: `_config.json` inside the settings directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the settings file, run log and last-run marker.
    ///
    /// Default: `$SYSBAK_HOME`, or `~/.sysbak`.
    #[arg(long, value_name = "DIR")]
    pub settings_dir: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SYSBAK_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Validate settings and print each job's expanded command without
    /// running anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run report as JSON instead of the coloured summary.
    #[arg(long)]
    pub json: bool,

    /// Do not touch the run log or the last-run marker.
    #[arg(long)]
    pub no_log: bool,

    /// Disable coloured terminal output.
    #[arg(long)]
    pub no_color: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
