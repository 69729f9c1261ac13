//! Filesystem side effects: file materialization and config patching

pub mod patcher;
pub mod writer;

pub use patcher::{ConfigPatchOutcome, ConfigPatcher};
pub use writer::{FileWriter, WriteOutcome};
