//! scaffold - A task-pipeline tool that scaffolds Docker configuration into a project

pub mod cli;
pub mod core;
pub mod docker;
pub mod execution;
pub mod files;
pub mod telemetry;

// Re-export commonly used types
pub use self::core::{
    Action, FileWrite, PipelineStatus, RunReport, ScaffoldError, StepRecord, StepStatus, TaskStep,
};
pub use docker::{DockerScaffold, EmbeddedTemplates, ProjectPaths, ScaffoldConfig, TemplateSource};
pub use execution::{ConfirmPrompt, PipelineOutcome, PipelineRunner, TerminalPrompt};
pub use files::{ConfigPatchOutcome, ConfigPatcher, FileWriter, WriteOutcome};
