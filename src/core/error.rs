//! Error taxonomy for scaffold operations

use std::path::PathBuf;
use thiserror::Error;

/// Error types for pipeline and filesystem operations
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Operator declined the confirmation prompt
    #[error("user aborted")]
    UserAborted,

    /// A filesystem operation failed (permissions, missing parent, disk full)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file was expected to exist but does not
    #[error("config file not found: {0}")]
    MissingConfig(PathBuf),
}

impl ScaffoldError {
    /// Process exit code to use when this error aborts the run
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::UserAborted => 1,
            ScaffoldError::Io(_) => 1,
            ScaffoldError::MissingConfig(_) => 1,
        }
    }
}
