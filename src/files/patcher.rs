//! Append-once patching of the project config file

use crate::core::ScaffoldError;
use crate::files::{FileWriter, WriteOutcome};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Result of a config patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPatchOutcome {
    /// The block was appended to the end of the file
    Appended,
    /// The marker was already present; the file was left untouched
    AlreadyPresent,
}

/// Appends a fixed text block to a config file exactly once, detected via
/// marker-substring presence.
///
/// This is a textual append, not a structured merge. It preserves every
/// existing byte, including comments and formatting, and is correct only
/// for formats where a top-level block at end-of-file is valid.
pub struct ConfigPatcher;

impl ConfigPatcher {
    /// Append `block` to `path` unless `marker` already occurs in its content.
    ///
    /// The file must already exist; its absence is a precondition violation.
    pub fn patch(
        path: &Path,
        marker: &str,
        block: &str,
    ) -> Result<ConfigPatchOutcome, ScaffoldError> {
        if !path.exists() {
            return Err(ScaffoldError::MissingConfig(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;

        if content.contains(marker) {
            debug!("Marker {:?} already present in {}", marker, path.display());
            return Ok(ConfigPatchOutcome::AlreadyPresent);
        }

        let patched = format!("{}{}", content, block);
        // The config file always exists here, so overwrite unconditionally.
        let outcome = FileWriter::write(path, &patched, true)?;
        debug_assert_eq!(outcome, WriteOutcome::Written);

        info!("Appended config block to {}", path.display());
        Ok(ConfigPatchOutcome::Appended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MARKER: &str = "[experimental.dockerfile]";
    const BLOCK: &str = "\n[experimental.dockerfile]\n\tenabled = true\n";

    #[test]
    fn test_patch_appends_block_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("project.toml");
        let original = "# comment\n[web]\n  port = 8910\n";
        fs::write(&path, original).unwrap();

        let outcome = ConfigPatcher::patch(&path, MARKER, BLOCK).unwrap();
        assert_eq!(outcome, ConfigPatchOutcome::Appended);

        let patched = fs::read_to_string(&path).unwrap();
        assert_eq!(patched, format!("{}{}", original, BLOCK));
        assert!(patched.starts_with(original));
    }

    #[test]
    fn test_patch_skips_when_marker_present() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("project.toml");
        let original = format!("[web]\n  port = 8910\n{}", BLOCK);
        fs::write(&path, &original).unwrap();

        let outcome = ConfigPatcher::patch(&path, MARKER, BLOCK).unwrap();
        assert_eq!(outcome, ConfigPatchOutcome::AlreadyPresent);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_patch_is_append_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("project.toml");
        fs::write(&path, "[web]\n").unwrap();

        assert_eq!(
            ConfigPatcher::patch(&path, MARKER, BLOCK).unwrap(),
            ConfigPatchOutcome::Appended
        );
        assert_eq!(
            ConfigPatcher::patch(&path, MARKER, BLOCK).unwrap(),
            ConfigPatchOutcome::AlreadyPresent
        );

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches(MARKER).count(), 1);
    }

    #[test]
    fn test_patch_missing_file_is_precondition_violation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("project.toml");

        let result = ConfigPatcher::patch(&path, MARKER, BLOCK);
        assert!(matches!(result, Err(ScaffoldError::MissingConfig(_))));
    }

    #[test]
    fn test_patch_does_not_validate_toml() {
        // Malformed input is left as-is and still patched (lenient by contract).
        let dir = tempdir().unwrap();
        let path = dir.path().join("project.toml");
        fs::write(&path, "not [ valid = toml").unwrap();

        let outcome = ConfigPatcher::patch(&path, MARKER, BLOCK).unwrap();
        assert_eq!(outcome, ConfigPatchOutcome::Appended);
        assert!(fs::read_to_string(&path)
            .unwrap()
            .starts_with("not [ valid = toml"));
    }
}
