//! Pipeline runner - executes steps in strict declaration order

use crate::{
    cli::output,
    core::{RunReport, ScaffoldError, StepStatus, TaskStep},
    execution::{ConfirmPrompt, StepExecutor, StepOutcome},
};
use chrono::Utc;
use tracing::{error, info};

/// Terminal outcome of one pipeline run
#[derive(Debug)]
pub enum PipelineOutcome {
    /// Every step ran (or skipped itself)
    Completed,
    /// A step failed; remaining steps did not execute
    Aborted(ScaffoldError),
}

impl PipelineOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, PipelineOutcome::Completed)
    }
}

/// Executes an ordered sequence of steps, surfaces the first failure, and
/// keeps a per-step status log regardless of display mode.
pub struct PipelineRunner<P> {
    executor: StepExecutor<P>,
    report: RunReport,
    verbose: bool,
}

impl<P: ConfirmPrompt> PipelineRunner<P> {
    pub fn new(prompt: P, verbose: bool) -> Self {
        Self {
            executor: StepExecutor::new(prompt),
            report: RunReport::new(),
            verbose,
        }
    }

    /// Run the steps strictly in declaration order.
    ///
    /// The first `Failed` outcome aborts the pipeline; the remaining steps
    /// stay `Pending` in the report and are never executed. Skips are
    /// recorded and execution continues.
    pub fn run(&mut self, steps: &[TaskStep]) -> PipelineOutcome {
        info!("Starting pipeline run {}", self.report.run_id);
        self.report
            .start(steps.iter().map(|s| s.title.clone()).collect());

        for (index, step) in steps.iter().enumerate() {
            self.report.records[index].status = StepStatus::Running {
                started_at: Utc::now(),
            };

            let started_at = Utc::now();
            let outcome = self.executor.execute(step);

            match outcome {
                StepOutcome::Succeeded => {
                    self.report.records[index].status = StepStatus::Succeeded {
                        started_at,
                        finished_at: Utc::now(),
                    };
                    self.render_step(step, &self.report.records[index].status);
                }
                StepOutcome::Skipped(reason) => {
                    info!("Step {} skipped: {}", step.display_title(), reason);
                    self.report.records[index].status = StepStatus::Skipped { reason };
                    self.render_step(step, &self.report.records[index].status);
                }
                StepOutcome::Failed(cause) => {
                    error!("Step {} failed: {}", step.display_title(), cause);
                    self.report.records[index].status = StepStatus::Failed {
                        error: cause.to_string(),
                    };
                    self.render_step(step, &self.report.records[index].status);
                    self.report.abort();
                    return PipelineOutcome::Aborted(cause);
                }
            }
        }

        self.report.complete();
        info!("Pipeline run {} completed", self.report.run_id);
        PipelineOutcome::Completed
    }

    /// Per-step status log, populated whether or not the run finished
    pub fn report(&self) -> &RunReport {
        &self.report
    }

    fn render_step(&self, step: &TaskStep, status: &StepStatus) {
        // Silent steps never render a line; the verbose toggle only changes
        // density for titled steps, not which statuses get recorded.
        if let Some(title) = &step.title {
            println!("{}", output::format_step_line(title, status, self.verbose));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, FileWrite, PipelineStatus};
    use crate::execution::prompt::testing::StaticPrompt;
    use std::fs;
    use tempfile::tempdir;

    fn prompt_step() -> TaskStep {
        TaskStep::new(
            "Confirmation",
            Action::Prompt {
                message: "Continue?".to_string(),
            },
        )
    }

    #[test]
    fn test_run_completes_and_records_all_steps() {
        let dir = tempdir().unwrap();
        let steps = vec![
            prompt_step(),
            TaskStep::new(
                "Adding a file...",
                Action::WriteFiles {
                    writes: vec![FileWrite {
                        path: dir.path().join("Dockerfile"),
                        contents: "FROM scratch\n".to_string(),
                        overwrite: false,
                    }],
                },
            ),
        ];

        let mut runner = PipelineRunner::new(StaticPrompt(true), false);
        let outcome = runner.run(&steps);

        assert!(outcome.is_completed());
        let report = runner.report();
        assert_eq!(report.status, PipelineStatus::Completed);
        assert_eq!(report.records.len(), 2);
        assert!(report.records.iter().all(|r| r.status.is_terminal()));
    }

    #[test]
    fn test_refused_prompt_aborts_before_later_steps() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("Dockerfile");
        let steps = vec![
            prompt_step(),
            TaskStep::new(
                "Adding a file...",
                Action::WriteFiles {
                    writes: vec![FileWrite {
                        path: target.clone(),
                        contents: "FROM scratch\n".to_string(),
                        overwrite: false,
                    }],
                },
            ),
        ];

        let mut runner = PipelineRunner::new(StaticPrompt(false), false);
        let outcome = runner.run(&steps);

        match outcome {
            PipelineOutcome::Aborted(cause) => assert_eq!(cause.to_string(), "user aborted"),
            other => panic!("Expected abort, got {:?}", other),
        }
        assert!(!target.exists());

        let report = runner.report();
        assert_eq!(report.status, PipelineStatus::Aborted);
        assert!(matches!(report.records[0].status, StepStatus::Failed { .. }));
        assert!(matches!(report.records[1].status, StepStatus::Pending));
    }

    #[test]
    fn test_io_failure_halts_remaining_steps() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();
        let config = dir.path().join("project.toml");
        fs::write(&config, "[web]\n").unwrap();

        let steps = vec![
            TaskStep::new(
                "Adding a file...",
                Action::WriteFiles {
                    writes: vec![FileWrite {
                        path: blocker.join("Dockerfile"),
                        contents: "FROM scratch\n".to_string(),
                        overwrite: false,
                    }],
                },
            ),
            TaskStep::new(
                "Adding config...",
                Action::PatchConfig {
                    path: config.clone(),
                    marker: "[experimental.dockerfile]".to_string(),
                    block: "\n[experimental.dockerfile]\n\tenabled = true\n".to_string(),
                },
            ),
        ];

        let mut runner = PipelineRunner::new(StaticPrompt(true), false);
        let outcome = runner.run(&steps);

        assert!(matches!(
            outcome,
            PipelineOutcome::Aborted(ScaffoldError::Io(_))
        ));
        // The patch step never executed.
        assert!(matches!(
            runner.report().records[1].status,
            StepStatus::Pending
        ));
        assert_eq!(fs::read_to_string(&config).unwrap(), "[web]\n");
    }

    #[test]
    fn test_skip_is_distinct_from_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Dockerfile");
        fs::write(&path, "original").unwrap();

        let steps = vec![TaskStep::new(
            "Adding a file...",
            Action::WriteFiles {
                writes: vec![FileWrite {
                    path,
                    contents: "FROM scratch\n".to_string(),
                    overwrite: false,
                }],
            },
        )];

        let mut runner = PipelineRunner::new(StaticPrompt(true), false);
        let outcome = runner.run(&steps);

        assert!(outcome.is_completed());
        assert!(matches!(
            runner.report().records[0].status,
            StepStatus::Skipped { .. }
        ));
    }
}
