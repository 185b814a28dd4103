// src/engine/runner.rs

use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::exec::{Launcher, ProcessOutput, ShellLauncher};
use crate::job::state::RunPhase;
use crate::job::{JobDescriptor, JobName, JobOutcome, JobState, VariableBinding};
use crate::report::{aggregate, RunReport};
use crate::splice::splice;

/// A job with its command fully expanded, not yet launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedJob {
    pub name: JobName,
    pub command: String,
}

/// Expand the command of every job, in input order. Launches nothing.
pub fn plan(
    jobs: &[JobDescriptor],
    template: &str,
    global_vars: &[VariableBinding],
) -> Vec<PlannedJob> {
    jobs.iter()
        .map(|job| PlannedJob {
            name: job.name.clone(),
            command: splice(template, job, global_vars),
        })
        .collect()
}

/// Runs a list of independent jobs concurrently and reports on all of them.
#[derive(Debug, Clone)]
pub struct JobRunner<L: Launcher> {
    launcher: L,
}

impl JobRunner<ShellLauncher> {
    pub fn with_shell() -> Self {
        Self::new(ShellLauncher::new())
    }
}

impl<L: Launcher> JobRunner<L> {
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Run every job and wait for all of them.
    ///
    /// All processes are started in list order before any is waited on. The
    /// join waits for every job regardless of earlier failures, and outcomes
    /// are collected by job position, so the report does not depend on which
    /// process finished first. Must be called from within a Tokio runtime.
    pub async fn run(
        &self,
        jobs: &[JobDescriptor],
        template: &str,
        global_vars: &[VariableBinding],
    ) -> RunReport {
        let mut phase = RunPhase::Idle;

        if jobs.is_empty() {
            enter(&mut phase, RunPhase::Aggregated);
            info!("no jobs configured; nothing to run");
            return RunReport::empty();
        }

        enter(&mut phase, RunPhase::Dispatching);
        info!(jobs = jobs.len(), "dispatching backup jobs");

        let slots: Vec<JobSlot> = plan(jobs, template, global_vars)
            .into_iter()
            .map(|planned| self.dispatch(planned))
            .collect();

        enter(&mut phase, RunPhase::AwaitingAll);

        // Each slot exclusively owns its handle until it is settled here, in
        // input order.
        let mut outcomes = Vec::with_capacity(slots.len());
        for slot in slots {
            outcomes.push(slot.settle().await);
        }

        let report = aggregate(outcomes);
        enter(&mut phase, RunPhase::Aggregated);

        info!(
            total = report.total(),
            succeeded = report.succeeded_count(),
            failed = report.failures().len(),
            "backup run finished"
        );
        report
    }

    fn dispatch(&self, planned: PlannedJob) -> JobSlot {
        let PlannedJob { name, command } = planned;
        debug!(job = %name, cmd = %command, "starting job");

        let launch = self.launcher.launch(command.clone());
        let handle = tokio::spawn(launch);

        JobSlot {
            name,
            command,
            state: advance(JobState::Pending, JobState::Running),
            handle,
        }
    }
}

/// Per-job result cell: the spawned task plus what is needed to describe it
/// if the task itself never reports back.
struct JobSlot {
    name: JobName,
    command: String,
    state: JobState,
    handle: JoinHandle<ProcessOutput>,
}

impl JobSlot {
    async fn settle(self) -> JobOutcome {
        let JobSlot {
            name,
            command,
            state,
            handle,
        } = self;

        let outcome = match handle.await {
            Ok(output) => JobOutcome::from_output(name, command, output),
            Err(join_err) => {
                error!(job = %name, error = %join_err, "job task did not complete");
                JobOutcome::launch_failure(
                    name,
                    command,
                    format!("job task did not complete: {join_err}"),
                )
            }
        };

        let state = advance(state, outcome.state());
        if outcome.failed {
            warn!(
                job = %outcome.name,
                exit_code = outcome.exit_code,
                %state,
                "job failed"
            );
        } else {
            info!(job = %outcome.name, %state, "job finished");
        }

        outcome
    }
}

fn advance(from: JobState, to: JobState) -> JobState {
    debug_assert!(from.advance(to).is_some(), "illegal job transition {from} -> {to}");
    to
}

fn enter(phase: &mut RunPhase, next: RunPhase) {
    debug_assert!(
        phase.advance(next).is_some(),
        "illegal run transition {phase:?} -> {next:?}"
    );
    debug!(from = ?phase, to = ?next, "run phase");
    *phase = next;
}
