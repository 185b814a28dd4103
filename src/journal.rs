// src/journal.rs

//! Run log and last-run marker.
//!
//! The log is append-only plain text. The last-run file holds a single
//! timestamp and is overwritten after every completed run, whether or not any
//! job failed.

use anyhow::Result;
use chrono::{DateTime, Local};
use tracing::debug;

use crate::config::SysbakPaths;
use crate::fs::FileSystem;
use crate::report::{render_failures, RunReport};

const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug, Clone)]
pub struct RunJournal<F: FileSystem> {
    fs: F,
    paths: SysbakPaths,
}

impl<F: FileSystem> RunJournal<F> {
    pub fn new(fs: F, paths: SysbakPaths) -> Self {
        Self { fs, paths }
    }

    pub fn record_start(&self, total: usize, now: DateTime<Local>) -> Result<()> {
        self.append_line(now, &format!("Starting backup run ({total} jobs)"))
    }

    /// Append the outcome of a finished run.
    pub fn record_report(&self, report: &RunReport, now: DateTime<Local>) -> Result<()> {
        if report.is_success() {
            return self.append_line(
                now,
                &format!(
                    "Backup run completed successfully ({} jobs)",
                    report.total()
                ),
            );
        }

        self.append_line(now, "Backup run completed with errors:")?;
        self.fs
            .append(&self.paths.log_file, render_failures(report).as_bytes())
    }

    /// Replace the last-run marker with `now`.
    pub fn write_last_run(&self, now: DateTime<Local>) -> Result<()> {
        let path = &self.paths.last_run_file;
        self.fs.write(path, now.to_rfc2822().as_bytes())?;
        debug!(path = ?path, "last-run marker written");
        Ok(())
    }

    /// Timestamp of the previous run, if one was recorded.
    pub fn last_run(&self) -> Result<Option<String>> {
        let path = &self.paths.last_run_file;
        if !self.fs.exists(path) {
            return Ok(None);
        }
        Ok(Some(self.fs.read_to_string(path)?.trim().to_string()))
    }

    fn append_line(&self, now: DateTime<Local>, message: &str) -> Result<()> {
        let line = format!("[{}] {message}\n", now.format(LOG_TIME_FORMAT));
        self.fs.append(&self.paths.log_file, line.as_bytes())
    }
}
