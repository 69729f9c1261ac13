//! CLI command definitions

use clap::Args;
use std::path::PathBuf;

/// Scaffold Docker configuration into a project
#[derive(Debug, Args, Clone)]
pub struct DockerCommand {
    /// Overwrite scaffold files that already exist
    #[arg(short, long)]
    pub force: bool,

    /// Project base directory (defaults to the current directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}
