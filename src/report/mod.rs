// src/report/mod.rs

//! Run reports.
//!
//! - [`aggregate`] turns the joined job outcomes into a [`RunReport`].
//! - [`render`] builds the plain-text failure report used by the terminal and
//!   the run log.

pub mod aggregate;
pub mod render;

pub use aggregate::{aggregate, JobStatus, RunReport};
pub use render::{render_failures, status_line, summary_line};
