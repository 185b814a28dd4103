// src/term.rs

//! Coloured terminal output.

use std::io::{self, Write};

use console::Style;

use crate::engine::PlannedJob;
use crate::job::JobState;
use crate::report::{render_failures, status_line, RunReport};

/// Writes the human-facing progress and report lines.
#[derive(Debug, Clone)]
pub struct Console {
    cyan: Style,
    green: Style,
    red: Style,
    yellow: Style,
    dim: Style,
}

impl Console {
    pub fn new(color: bool) -> Self {
        let base = Style::new().force_styling(color);
        Self {
            cyan: base.clone().cyan(),
            green: base.clone().green(),
            red: base.clone().red(),
            yellow: base.clone().yellow(),
            dim: base.dim(),
        }
    }

    pub fn banner(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}\n", self.cyan.apply_to("System Backup Script"))
    }

    pub fn starting(&self, out: &mut impl Write, total: usize) -> io::Result<()> {
        writeln!(out, "Running {total} backup jobs...")
    }

    pub fn dry_run(&self, out: &mut impl Write, planned: &[PlannedJob]) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            self.yellow.apply_to("Dry run: no commands will be executed.")
        )?;
        for job in planned {
            writeln!(out, "  {} {}", self.dim.apply_to(format!("{}:", job.name)), job.command)?;
        }
        Ok(())
    }

    /// Per-job status lines followed by either the success line or the
    /// failure report.
    pub fn report(&self, out: &mut impl Write, report: &RunReport) -> io::Result<()> {
        for status in report.statuses() {
            let style = match status.state {
                JobState::Failed => &self.red,
                _ => &self.green,
            };
            writeln!(out, "{}", style.apply_to(status_line(status)))?;
        }

        if report.is_success() {
            return writeln!(
                out,
                "{}",
                self.green
                    .apply_to(format!("All {} jobs completed successfully.", report.total()))
            );
        }
        writeln!(out)?;
        write!(out, "{}", self.red.apply_to(render_failures(report)))
    }

    pub fn done(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "\n{}", self.green.apply_to("Done!"))
    }

    pub fn fatal(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        writeln!(out, "{}", self.red.apply_to(format!("Error:  {message}  Exiting...")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::exec::ProcessOutput;
    use crate::job::JobOutcome;
    use crate::report::aggregate;

    fn render(report: &RunReport) -> String {
        let mut out = Vec::new();
        Console::new(false).report(&mut out, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn report_lists_every_job_before_the_failures() {
        let report = aggregate(vec![
            JobOutcome::from_output("home".into(), "b home".into(), ProcessOutput::new(0, "", "")),
            JobOutcome::from_output("etc".into(), "b etc".into(), ProcessOutput::new(3, "", "denied")),
        ]);
        let text = render(&report);

        assert!(text.starts_with("  home: succeeded\n  etc: failed\n"));
        assert!(text.contains("Job:        etc"));
        assert!(text.ends_with("1 of 2 jobs completed with errors.\n"));
    }

    #[test]
    fn successful_report_ends_with_success_line() {
        let report = aggregate(vec![JobOutcome::from_output(
            "home".into(),
            "b home".into(),
            ProcessOutput::new(0, "", ""),
        )]);
        assert_eq!(
            render(&report),
            "  home: succeeded\nAll 1 jobs completed successfully.\n"
        );
    }

    #[test]
    fn fatal_line_without_colour() {
        let mut out = Vec::new();
        Console::new(false).fatal(&mut out, "bad settings").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error:  bad settings  Exiting...\n"
        );
    }
}
