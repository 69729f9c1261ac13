//! Step domain model

use std::path::PathBuf;

/// A single step in a pipeline
///
/// Steps are created once per pipeline invocation and are immutable after
/// construction; the runner that executes them owns them exclusively.
#[derive(Debug, Clone)]
pub struct TaskStep {
    /// Title shown in the per-step status log. Silent steps have none.
    pub title: Option<String>,

    /// The effect this step performs
    pub action: Action,
}

impl TaskStep {
    /// Create a titled step
    pub fn new(title: impl Into<String>, action: Action) -> Self {
        TaskStep {
            title: Some(title.into()),
            action,
        }
    }

    /// Create a silent step (no rendered title)
    pub fn silent(action: Action) -> Self {
        TaskStep {
            title: None,
            action,
        }
    }

    /// Whether this step blocks on operator input
    pub fn is_interactive(&self) -> bool {
        matches!(self.action, Action::Prompt { .. })
    }

    /// Title for display, falling back to a placeholder for silent steps
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(silent)")
    }
}

/// The effect a step performs when executed
#[derive(Debug, Clone)]
pub enum Action {
    /// Block on an operator confirmation; refusal aborts the pipeline
    Prompt { message: String },

    /// Write one or more files, each independently skippable
    WriteFiles { writes: Vec<FileWrite> },

    /// Append a block to a config file unless the marker is already present
    PatchConfig {
        path: PathBuf,
        marker: String,
        block: String,
    },

    /// Print an informational epilogue; no filesystem effect
    Notify {
        command: String,
        description: String,
        topic_id: String,
    },
}

/// A single file-write effect
#[derive(Debug, Clone)]
pub struct FileWrite {
    /// Destination path
    pub path: PathBuf,

    /// Full byte content to materialize
    pub contents: String,

    /// Replace an existing file instead of skipping it
    pub overwrite: bool,
}
