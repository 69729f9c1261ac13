//! Project path resolution

use crate::core::ScaffoldError;
use std::path::PathBuf;

/// Name of the project config file patched by the scaffold
pub const CONFIG_FILE_NAME: &str = "project.toml";

/// Resolved locations for one project
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    /// Project base directory; scaffold files land directly under it
    pub base: PathBuf,

    /// The project's structured config file
    pub config_file: PathBuf,
}

impl ProjectPaths {
    /// Resolve from an optional base dir, defaulting to the current directory
    pub fn resolve(dir: Option<PathBuf>) -> Result<Self, ScaffoldError> {
        let base = match dir {
            Some(d) => d,
            None => std::env::current_dir()?,
        };
        Ok(Self::from_base(base))
    }

    /// Build paths from a known base directory
    pub fn from_base(base: PathBuf) -> Self {
        let config_file = base.join(CONFIG_FILE_NAME);
        Self { base, config_file }
    }
}
