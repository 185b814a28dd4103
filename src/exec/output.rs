// src/exec/output.rs

/// Exit code used when a process produced no status of its own (killed by a
/// signal, or never started).
pub const NO_EXIT_CODE: i32 = -1;

/// Captured result of one external command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// The command could not be started (or waited on). No stdout; the error
    /// text takes the place of stderr.
    pub fn launch_error(error: impl Into<String>) -> Self {
        Self::new(NO_EXIT_CODE, String::new(), error)
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}
