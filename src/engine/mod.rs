// src/engine/mod.rs

//! Job orchestration.
//!
//! [`JobRunner`] expands every job's command, starts all of them at once
//! through a [`crate::exec::Launcher`], waits for every one to settle, and
//! hands the outcomes to [`crate::report::aggregate`].

pub mod runner;

pub use crate::job::state::RunPhase;
pub use runner::{plan, JobRunner, PlannedJob};
