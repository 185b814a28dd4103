// src/exec/shell.rs

//! Production launcher: runs each command through the platform shell.

use std::future;
use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::{Child, Command};
use tracing::{debug, error};

use super::backend::{LaunchFuture, Launcher};
use super::output::{NO_EXIT_CODE, ProcessOutput};

/// Runs commands with `sh -c` (or `cmd /C` on Windows), capturing stdout and
/// stderr in full.
#[derive(Debug, Clone)]
pub struct ShellLauncher {
    program: String,
    flag: String,
}

impl ShellLauncher {
    pub fn new() -> Self {
        if cfg!(windows) {
            Self::with_shell("cmd", "/C")
        } else {
            Self::with_shell("sh", "-c")
        }
    }

    /// Use a specific interpreter, e.g. `("bash", "-c")`.
    pub fn with_shell(program: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            flag: flag.into(),
        }
    }

    fn spawn(&self, command: &str) -> Result<Child> {
        let mut cmd = Command::new(&self.program);
        cmd.arg(&self.flag)
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        cmd.spawn()
            .with_context(|| format!("spawning `{command}` via {}", self.program))
    }
}

impl Default for ShellLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl Launcher for ShellLauncher {
    fn launch(&self, command: String) -> LaunchFuture {
        match self.spawn(&command) {
            Ok(child) => Box::pin(wait_for(child, command)),
            Err(err) => Box::pin(future::ready(launch_error(&command, err))),
        }
    }
}

async fn wait_for(child: Child, command: String) -> ProcessOutput {
    // Drains both pipes while waiting, so a chatty process can't block on a
    // full buffer.
    let output = match child
        .wait_with_output()
        .await
        .with_context(|| format!("waiting for `{command}`"))
    {
        Ok(output) => output,
        Err(err) => return launch_error(&command, err),
    };

    let success = output.status.success();
    // A signal death has no code; report it outside the success range.
    let exit_code = output.status.code().unwrap_or(NO_EXIT_CODE);
    debug!(cmd = %command, exit_code, success, "process exited");

    ProcessOutput {
        exit_code: if success { 0 } else { nonzero(exit_code) },
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

fn launch_error(command: &str, err: anyhow::Error) -> ProcessOutput {
    let message = format!("{err:#}");
    error!(cmd = %command, error = %message, "failed to launch process");
    ProcessOutput::launch_error(message)
}

fn nonzero(code: i32) -> i32 {
    if code == 0 { NO_EXIT_CODE } else { code }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn captures_stdout_and_zero_exit() {
        let out = ShellLauncher::new().launch("echo hello".to_string()).await;
        assert!(out.success());
        assert_eq!(out.stdout.trim(), "hello");
        assert!(out.stderr.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_is_a_normal_outcome() {
        let out = ShellLauncher::new()
            .launch("echo oops >&2; exit 7".to_string())
            .await;
        assert!(!out.success());
        assert_eq!(out.exit_code, 7);
        assert_eq!(out.stderr.trim(), "oops");
    }

    #[tokio::test]
    async fn missing_interpreter_is_reported_as_failure() {
        let out = ShellLauncher::with_shell("/definitely/not/a/shell", "-c")
            .launch("true".to_string())
            .await;
        assert_eq!(out.exit_code, NO_EXIT_CODE);
        assert!(out.stdout.is_empty());
        assert!(out.stderr.contains("/definitely/not/a/shell"));
    }
}
