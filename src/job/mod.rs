// src/job/mod.rs

//! Job data model.
//!
//! - [`JobDescriptor`] / [`VariableBinding`] are built from validated settings
//!   and stay immutable for the duration of a run.
//! - [`JobOutcome`] is produced exactly once per job after its process ends.
//! - [`state`] holds the per-job lifecycle used by the runner.

pub mod state;

use serde::{Deserialize, Serialize};

use crate::exec::ProcessOutput;

pub use state::JobState;

/// Canonical job name type used throughout the runner.
pub type JobName = String;

/// A single `variable -> value` substitution.
///
/// ```json
/// { "variable": "$REPO", "value": "/mnt/backup/restic" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VariableBinding {
    pub variable: String,
    pub value: String,
}

impl VariableBinding {
    pub fn new(variable: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            value: value.into(),
        }
    }
}

/// One configured unit of backup work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDescriptor {
    pub name: JobName,
    pub location: String,
    /// Full command override; when set it replaces the shared template.
    pub command: Option<String>,
    /// Job-scoped bindings, applied in order after the built-in tokens.
    pub vars: Vec<VariableBinding>,
}

impl JobDescriptor {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            command: None,
            vars: Vec::new(),
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn with_var(mut self, variable: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.push(VariableBinding::new(variable, value));
        self
    }
}

/// Terminal result of one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobOutcome {
    pub name: JobName,
    /// The fully expanded command that was handed to the launcher.
    pub command: String,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub failed: bool,
}

impl JobOutcome {
    pub fn from_output(name: JobName, command: String, output: ProcessOutput) -> Self {
        let failed = !output.success();
        Self {
            name,
            command,
            exit_code: output.exit_code,
            stdout: output.stdout,
            stderr: output.stderr,
            failed,
        }
    }

    /// Outcome for a job whose process never produced a status of its own
    /// (for example the task driving it panicked).
    pub fn launch_failure(name: JobName, command: String, error: impl Into<String>) -> Self {
        Self::from_output(name, command, ProcessOutput::launch_error(error))
    }

    pub fn state(&self) -> JobState {
        if self.failed {
            JobState::Failed
        } else {
            JobState::Succeeded
        }
    }
}
