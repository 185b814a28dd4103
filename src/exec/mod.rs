// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] provides the [`Launcher`] trait the runner talks to, so tests
//!   can swap in a scripted launcher that never touches the OS.
//! - [`shell`] is the production [`ShellLauncher`], built on
//!   `tokio::process::Command`.
//! - [`output`] holds [`ProcessOutput`], the terminal result of one launch.

pub mod backend;
pub mod output;
pub mod shell;

pub use backend::Launcher;
pub use output::ProcessOutput;
pub use shell::ShellLauncher;
