//! Idempotent file materialization

use crate::core::ScaffoldError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Result of a single file write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created or replaced with the full content
    Written,
    /// A file already exists at the path and overwrite was not requested
    AlreadyExists,
}

/// Writes byte payloads to paths, refusing to clobber existing files
/// unless explicitly forced.
pub struct FileWriter;

impl FileWriter {
    /// Write `contents` to `path`.
    ///
    /// Creates parent directories as needed. When a file already exists at
    /// `path` and `overwrite` is false, no I/O happens and the caller is
    /// expected to treat the outcome as a skip, not an error. Writes go
    /// through a temp file in the target directory and a rename, so readers
    /// never observe a truncated file.
    pub fn write(
        path: &Path,
        contents: &str,
        overwrite: bool,
    ) -> Result<WriteOutcome, ScaffoldError> {
        if path.exists() && !overwrite {
            debug!("File already exists, not overwriting: {}", path.display());
            return Ok(WriteOutcome::AlreadyExists);
        }

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| e.error)?;

        info!("Wrote {} ({} bytes)", path.display(), contents.len());
        Ok(WriteOutcome::Written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_file_and_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("Dockerfile");

        let outcome = FileWriter::write(&path, "FROM scratch\n", false).unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "FROM scratch\n");
    }

    #[test]
    fn test_write_skips_existing_without_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Dockerfile");
        fs::write(&path, "original").unwrap();

        let outcome = FileWriter::write(&path, "replacement", false).unwrap();
        assert_eq!(outcome, WriteOutcome::AlreadyExists);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_write_replaces_existing_with_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Dockerfile");
        fs::write(&path, "original").unwrap();

        let outcome = FileWriter::write(&path, "replacement", true).unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "replacement");
    }

    #[test]
    fn test_write_fails_when_parent_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();

        let path = blocker.join("Dockerfile");
        let result = FileWriter::write(&path, "content", false);
        assert!(matches!(result, Err(ScaffoldError::Io(_))));
    }
}
