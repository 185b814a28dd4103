// src/exec/backend.rs

//! Pluggable launcher abstraction.
//!
//! The runner talks to a `Launcher` instead of spawning processes directly.
//! Production code uses [`super::ShellLauncher`]; tests provide their own
//! implementation that, for example, scripts exit codes and delays and records
//! the order in which commands were launched.

use std::future::Future;
use std::pin::Pin;

use super::output::ProcessOutput;

/// Future that resolves once a launched command has terminated.
pub type LaunchFuture = Pin<Box<dyn Future<Output = ProcessOutput> + Send + 'static>>;

/// Starts one external command.
///
/// The command must be started before `launch` returns; the returned future
/// only waits for it. This is what lets the runner guarantee that job `i` is
/// started no later than job `i + 1`.
///
/// Implementations must never fail: a nonzero exit, a signal, or a spawn
/// error are all reported through [`ProcessOutput`].
pub trait Launcher: Send + Sync {
    fn launch(&self, command: String) -> LaunchFuture;
}
