//! Execution state models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Overall pipeline execution status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineStatus {
    /// Pipeline has not started
    Idle,
    /// Pipeline is currently running
    Running,
    /// All steps finished without a fatal error
    Completed,
    /// A step failed or the operator refused confirmation
    Aborted,
}

/// State of a single step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StepStatus {
    /// Step has not run yet
    Pending,
    /// Step is currently running
    Running { started_at: DateTime<Utc> },
    /// Step performed its effect
    Succeeded {
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    },
    /// Step found its effect already satisfied and did nothing
    Skipped { reason: String },
    /// Step raised a fatal error; no later step runs
    Failed { error: String },
}

impl StepStatus {
    /// Check if the step is in a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            StepStatus::Succeeded { .. } | StepStatus::Skipped { .. } | StepStatus::Failed { .. }
        )
    }
}

/// Status log entry for one step, recorded regardless of display mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    /// Step title (None for silent steps)
    pub title: Option<String>,

    /// Current status
    pub status: StepStatus,
}

/// Status log for one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique run ID
    pub run_id: Uuid,

    /// Current pipeline status
    pub status: PipelineStatus,

    /// When the run started
    pub started_at: Option<DateTime<Utc>>,

    /// When the run completed or aborted
    pub finished_at: Option<DateTime<Utc>>,

    /// Per-step records, in declaration order
    pub records: Vec<StepRecord>,
}

impl RunReport {
    /// Create a report for an idle run
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            status: PipelineStatus::Idle,
            started_at: None,
            finished_at: None,
            records: Vec::new(),
        }
    }

    /// Mark the run as started with one pending record per step title
    pub fn start(&mut self, titles: Vec<Option<String>>) {
        self.status = PipelineStatus::Running;
        self.started_at = Some(Utc::now());
        self.records = titles
            .into_iter()
            .map(|title| StepRecord {
                title,
                status: StepStatus::Pending,
            })
            .collect();
    }

    /// Mark the run as completed
    pub fn complete(&mut self) {
        self.status = PipelineStatus::Completed;
        self.finished_at = Some(Utc::now());
    }

    /// Mark the run as aborted
    pub fn abort(&mut self) {
        self.status = PipelineStatus::Aborted;
        self.finished_at = Some(Utc::now());
    }

    /// Number of steps with a terminal status
    pub fn settled_steps(&self) -> usize {
        self.records.iter().filter(|r| r.status.is_terminal()).count()
    }

    /// Progress fraction (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.settled_steps() as f64 / self.records.len() as f64
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}
