// tests/report_properties.rs

mod common;
use crate::common::{JobBuilder, Script, ScriptedLauncher};

use std::time::Duration;

use proptest::prelude::*;
use sysbak::engine::JobRunner;
use sysbak::exec::ProcessOutput;
use sysbak::job::JobOutcome;
use sysbak::report::aggregate;

// (exit code, delay in ms) per job.
fn job_scripts(max_jobs: usize) -> impl Strategy<Value = Vec<(i32, u64)>> {
    proptest::collection::vec((prop_oneof![Just(0), 1..130i32], 0..15u64), 0..=max_jobs)
}

proptest! {
    #[test]
    fn aggregate_counts_add_up(codes in proptest::collection::vec(-1..5i32, 0..40)) {
        let outcomes: Vec<JobOutcome> = codes
            .iter()
            .enumerate()
            .map(|(i, &code)| JobOutcome::from_output(
                format!("job{i}"),
                format!("cmd{i}"),
                ProcessOutput::new(code, "", ""),
            ))
            .collect();

        let report = aggregate(outcomes);

        prop_assert_eq!(report.total(), codes.len());
        prop_assert_eq!(report.succeeded_count() + report.failures().len(), report.total());
        prop_assert!(report.failures().iter().all(|o| o.failed && o.exit_code != 0));

        // Failures appear in input order.
        let expected: Vec<String> = codes
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != 0)
            .map(|(i, _)| format!("job{i}"))
            .collect();
        let actual: Vec<String> = report.failures().iter().map(|o| o.name.clone()).collect();
        prop_assert_eq!(actual, expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn runner_reports_every_job_once(scripts in job_scripts(12)) {
        let rt = tokio::runtime::Runtime::new().unwrap();

        let mut launcher = ScriptedLauncher::new();
        let mut jobs = Vec::new();
        for (i, (code, delay)) in scripts.iter().enumerate() {
            let cmd = format!("run job{i}");
            launcher = launcher.script(
                &cmd,
                Script::exit(*code).after(Duration::from_millis(*delay)),
            );
            jobs.push(JobBuilder::new(&format!("job{i}")).command(&cmd).build());
        }
        let runner = JobRunner::new(launcher.clone());

        let report = rt.block_on(runner.run(&jobs, "", &[]));

        prop_assert_eq!(report.total(), jobs.len());
        prop_assert_eq!(launcher.launched().len(), jobs.len());
        prop_assert_eq!(report.succeeded_count() + report.failures().len(), jobs.len());

        let expected: Vec<String> = scripts
            .iter()
            .enumerate()
            .filter(|(_, (code, _))| *code != 0)
            .map(|(i, _)| format!("job{i}"))
            .collect();
        let actual: Vec<String> = report.failures().iter().map(|o| o.name.clone()).collect();
        prop_assert_eq!(actual, expected);
    }
}
