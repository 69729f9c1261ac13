//! Docker scaffold - composes the fixed step pipeline

pub mod paths;
pub mod templates;

pub use paths::ProjectPaths;
pub use templates::{EmbeddedTemplates, TemplateSource};

use crate::{
    core::{Action, FileWrite, RunReport, ScaffoldError, TaskStep},
    execution::{ConfirmPrompt, PipelineOutcome, PipelineRunner},
};
use std::io;
use tracing::debug;

/// Command name shown in the epilogue
pub const COMMAND: &str = "setup docker";

/// Command description shown in the epilogue
pub const DESCRIPTION: &str = "Set up an experimental Dockerfile and compose files";

/// Discussion topic for the experimental Docker setup
pub const EXPERIMENTAL_TOPIC_ID: &str = "4832";

/// Section marker checked before patching the project config
pub const CONFIG_MARKER: &str = "[experimental.dockerfile]";

/// Block appended to the project config, verbatim
pub const CONFIG_BLOCK: &str = "\n[experimental.dockerfile]\n\tenabled = true\n";

/// Warning shown before any file is touched
const CONFIRM_MESSAGE: &str = "The Dockerfile is experimental. Continue?";

/// One invocation's configuration, immutable once constructed
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Resolved project locations
    pub paths: ProjectPaths,

    /// Overwrite already-existing scaffold files
    pub force: bool,

    /// Dense status rendering
    pub verbose: bool,
}

/// Builds and runs the fixed Docker scaffold pipeline:
/// confirm, write three template files, patch the config, epilogue.
pub struct DockerScaffold<T> {
    config: ScaffoldConfig,
    templates: T,
}

impl<T: TemplateSource> DockerScaffold<T> {
    pub fn new(config: ScaffoldConfig, templates: T) -> Self {
        Self { config, templates }
    }

    /// Assemble the step sequence for this invocation.
    ///
    /// Every step is idempotent and safely re-runnable. The force flag
    /// propagates to each file write; the config patch ignores it and is
    /// always append-once.
    pub fn steps(&self) -> Result<Vec<TaskStep>, ScaffoldError> {
        let base = &self.config.paths.base;

        let mut steps = vec![TaskStep::new(
            "Confirmation",
            Action::Prompt {
                message: CONFIRM_MESSAGE.to_string(),
            },
        )];

        let writes = [
            ("Adding the experimental Dockerfile...", templates::DOCKERFILE),
            (
                "Adding the experimental Docker compose dev file...",
                templates::COMPOSE_DEV,
            ),
            (
                "Adding the experimental Docker compose prod file...",
                templates::COMPOSE_PROD,
            ),
        ];

        for (title, name) in writes {
            let contents = self.template(name)?;
            steps.push(TaskStep::new(
                title,
                Action::WriteFiles {
                    writes: vec![FileWrite {
                        path: base.join(name),
                        contents,
                        overwrite: self.config.force,
                    }],
                },
            ));
        }

        steps.push(TaskStep::new(
            format!("Adding config to {}...", paths::CONFIG_FILE_NAME),
            Action::PatchConfig {
                path: self.config.paths.config_file.clone(),
                marker: CONFIG_MARKER.to_string(),
                block: CONFIG_BLOCK.to_string(),
            },
        ));

        steps.push(TaskStep::silent(Action::Notify {
            command: COMMAND.to_string(),
            description: DESCRIPTION.to_string(),
            topic_id: EXPERIMENTAL_TOPIC_ID.to_string(),
        }));

        debug!("Assembled {} scaffold steps", steps.len());
        Ok(steps)
    }

    /// Run the pipeline with the given prompt collaborator.
    ///
    /// The report carries a record for every step whether or not the run
    /// finished.
    pub fn run<P: ConfirmPrompt>(
        &self,
        prompt: P,
    ) -> Result<(PipelineOutcome, RunReport), ScaffoldError> {
        let steps = self.steps()?;
        let mut runner = PipelineRunner::new(prompt, self.config.verbose);
        let outcome = runner.run(&steps);
        Ok((outcome, runner.report().clone()))
    }

    fn template(&self, name: &str) -> Result<String, ScaffoldError> {
        self.templates
            .load(name)
            .map(str::to_owned)
            .ok_or_else(|| {
                ScaffoldError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("template not found: {name}"),
                ))
            })
    }
}
