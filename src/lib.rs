// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod job;
pub mod journal;
pub mod logging;
pub mod report;
pub mod splice;
pub mod term;

use std::io::{self, ErrorKind, Write};

use chrono::Local;
use tracing::{debug, warn};

use crate::cli::CliArgs;
use crate::config::{load_and_validate, Settings, SysbakPaths};
use crate::engine::{plan, JobRunner};
use crate::errors::{Result, SysbakError};
use crate::exec::Launcher;
use crate::fs::{FileSystem, RealFileSystem};
use crate::journal::RunJournal;
use crate::report::RunReport;
use crate::term::Console;

/// High-level entry point used by `main.rs`.
///
/// Runs [`run_with`] with the shell launcher, the real filesystem and stdout.
pub async fn run(args: &CliArgs) -> Result<RunReport> {
    run_with(args, &JobRunner::with_shell(), RealFileSystem, &mut io::stdout()).await
}

/// Binary-level flow with every side effect injected.
///
/// This wires together:
/// - path resolution and settings loading (fatal on error)
/// - `--dry-run`: expanded commands are printed and nothing is launched
/// - the run log and last-run marker through `fs`, unless `--no-log`
/// - terminal output, or the JSON report with `--json`
pub async fn run_with<L, F, W>(
    args: &CliArgs,
    runner: &JobRunner<L>,
    fs: F,
    out: &mut W,
) -> Result<RunReport>
where
    L: Launcher,
    F: FileSystem,
    W: Write,
{
    let term = Console::new(!args.no_color);
    let paths = SysbakPaths::resolve(args.settings_dir.as_deref(), args.config.as_deref());
    debug!(?paths, "resolved sysbak paths");

    if !args.json {
        term.banner(out)?;
    }
    let settings = load_settings(&paths)?;

    if args.dry_run {
        let planned = plan(settings.jobs(), settings.backup_command(), settings.cmd_vars());
        if args.json {
            let commands: Vec<_> = planned
                .iter()
                .map(|job| serde_json::json!({ "name": job.name, "command": job.command }))
                .collect();
            writeln!(out, "{}", to_json(&commands)?)?;
        } else {
            term.dry_run(out, &planned)?;
        }
        return Ok(RunReport::empty());
    }

    let journal = (!args.no_log).then(|| RunJournal::new(fs, paths));

    if !args.json {
        term.starting(out, settings.jobs().len())?;
    }
    let report = execute(runner, &settings, journal.as_ref()).await;

    if args.json {
        writeln!(out, "{}", to_json(&report)?)?;
    } else {
        term.report(out, &report)?;
        term.done(out)?;
    }
    Ok(report)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value).map_err(anyhow::Error::from)?)
}

/// Run every job in `settings` and record the result in `journal`, if any.
///
/// Journal failures are logged and otherwise ignored; they never change the
/// run report.
pub async fn execute<L, F>(
    runner: &JobRunner<L>,
    settings: &Settings,
    journal: Option<&RunJournal<F>>,
) -> RunReport
where
    L: Launcher,
    F: FileSystem,
{
    if let Some(journal) = journal {
        if let Err(err) = journal.record_start(settings.jobs().len(), Local::now()) {
            warn!(error = %err, "could not write run log");
        }
    }

    let report = runner
        .run(settings.jobs(), settings.backup_command(), settings.cmd_vars())
        .await;

    if let Some(journal) = journal {
        let now = Local::now();
        if let Err(err) = journal.record_report(&report, now) {
            warn!(error = %err, "could not write run log");
        }
        if let Err(err) = journal.write_last_run(now) {
            warn!(error = %err, "could not write last-run marker");
        }
    }

    report
}

/// Load and validate the settings file. Any failure to read the file becomes
/// a configuration error naming it.
pub fn load_settings(paths: &SysbakPaths) -> Result<Settings> {
    let path = paths.settings_file.display();
    load_and_validate(&paths.settings_file).map_err(|err| match err {
        SysbakError::IoError(io) if io.kind() == ErrorKind::NotFound => {
            SysbakError::ConfigError(format!("Can't find a '{path}' configuration file."))
        }
        SysbakError::IoError(io) => {
            SysbakError::ConfigError(format!("Can't read the '{path}' configuration file: {io}"))
        }
        other => other,
    })
}
