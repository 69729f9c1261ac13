//! Pipeline execution

pub mod executor;
pub mod prompt;
pub mod runner;

pub use executor::{StepExecutor, StepOutcome};
pub use prompt::{ConfirmPrompt, TerminalPrompt};
pub use runner::{PipelineOutcome, PipelineRunner};
