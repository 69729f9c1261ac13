//! Step executor - performs the effect of a single step

use crate::{
    cli::output,
    core::{Action, ScaffoldError, TaskStep},
    execution::ConfirmPrompt,
    files::{ConfigPatchOutcome, ConfigPatcher, FileWriter, WriteOutcome},
};
use tracing::{debug, info, warn};

/// Result of executing a step
#[derive(Debug)]
pub enum StepOutcome {
    /// The step performed its effect
    Succeeded,
    /// The effect was already satisfied; nothing was done
    Skipped(String),
    /// The step raised a fatal error
    Failed(ScaffoldError),
}

/// Executes a single step's action against its collaborators
pub struct StepExecutor<P> {
    prompt: P,
}

impl<P: ConfirmPrompt> StepExecutor<P> {
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }

    /// Execute a step and return the outcome
    ///
    /// Skips and failures are both expressed in the returned value; this
    /// never panics and never swallows an error.
    pub fn execute(&self, step: &TaskStep) -> StepOutcome {
        info!("Executing step: {}", step.display_title());

        match &step.action {
            Action::Prompt { message } => match self.prompt.confirm(message) {
                Ok(true) => StepOutcome::Succeeded,
                Ok(false) => {
                    warn!("Operator declined confirmation");
                    StepOutcome::Failed(ScaffoldError::UserAborted)
                }
                Err(e) => StepOutcome::Failed(e),
            },

            Action::WriteFiles { writes } => {
                let mut written = 0usize;
                let mut existing = Vec::new();

                for write in writes {
                    match FileWriter::write(&write.path, &write.contents, write.overwrite) {
                        Ok(WriteOutcome::Written) => written += 1,
                        Ok(WriteOutcome::AlreadyExists) => {
                            existing.push(write.path.display().to_string())
                        }
                        Err(e) => return StepOutcome::Failed(e),
                    }
                }

                if written == 0 && !existing.is_empty() {
                    StepOutcome::Skipped(format!("{} already exists", existing.join(", ")))
                } else {
                    StepOutcome::Succeeded
                }
            }

            Action::PatchConfig {
                path,
                marker,
                block,
            } => match ConfigPatcher::patch(path, marker, block) {
                Ok(ConfigPatchOutcome::Appended) => StepOutcome::Succeeded,
                Ok(ConfigPatchOutcome::AlreadyPresent) => StepOutcome::Skipped(format!(
                    "The {} config block already exists in '{}'.",
                    marker,
                    path.display()
                )),
                Err(e) => StepOutcome::Failed(e),
            },

            Action::Notify {
                command,
                description,
                topic_id,
            } => {
                debug!("Printing epilogue for command {}", command);
                output::print_epilogue(command, description, topic_id);
                StepOutcome::Succeeded
            }
        }
    }
}
