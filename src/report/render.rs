// src/report/render.rs

use std::fmt::Write;

use super::aggregate::{JobStatus, RunReport};

pub const SEPARATOR: &str = "----------------------------------------";

/// `"<k> of <n> jobs completed with errors."`
pub fn summary_line(report: &RunReport) -> String {
    format!(
        "{} of {} jobs completed with errors.",
        report.failures().len(),
        report.total()
    )
}

/// `"  <name>: <state>"`, one per job.
pub fn status_line(status: &JobStatus) -> String {
    format!("  {}: {}", status.name, status.state)
}

/// Plain-text report of every failed job, separated by [`SEPARATOR`] and
/// followed by [`summary_line`]. Empty when nothing failed.
pub fn render_failures(report: &RunReport) -> String {
    if report.is_success() {
        return String::new();
    }

    let mut out = String::new();
    for (idx, failure) in report.failures().iter().enumerate() {
        if idx > 0 {
            out.push_str(SEPARATOR);
            out.push('\n');
        }
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Job:        {}", failure.name);
        let _ = writeln!(out, "Command:    {}", failure.command);
        let _ = writeln!(out, "Exit code:  {}", failure.exit_code);
        let _ = writeln!(out, "Error output:");
        let stderr = failure.stderr.trim_end();
        if stderr.is_empty() {
            out.push_str("  (none)\n");
        } else {
            for line in stderr.lines() {
                let _ = writeln!(out, "  {line}");
            }
        }
    }
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(&summary_line(report));
    out.push('\n');
    out
}
