use crate::error::{Result, SuiteError};
use std::path::Path;

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => SuiteError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => SuiteError::from(e),
        })?;
    }
    Ok(())
}

pub fn remove_dir_recursive(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => SuiteError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => SuiteError::from(e),
        })?;
    }
    Ok(())
}

/// Remove a file, tolerating only the case where it does not exist.
///
/// Returns whether a file was actually removed. Any failure other than
/// NotFound (permissions, I/O) propagates.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(SuiteError::from(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dir_exists() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("a/b/c");

        ensure_dir_exists(&nested).unwrap();
        assert!(nested.is_dir());

        // Idempotent on an existing directory
        ensure_dir_exists(&nested).unwrap();
    }

    #[test]
    fn test_remove_dir_recursive() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("tree");
        std::fs::create_dir_all(dir.join("sub")).unwrap();
        std::fs::write(dir.join("sub/file.svg"), b"<svg/>").unwrap();

        remove_dir_recursive(&dir).unwrap();
        assert!(!dir.exists());

        // Missing directory is a no-op
        remove_dir_recursive(&dir).unwrap();
    }

    #[test]
    fn test_remove_file_if_exists() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("fixture.svg");
        std::fs::write(&file, b"<svg/>").unwrap();

        assert!(remove_file_if_exists(&file).unwrap());
        assert!(!file.exists());
        assert!(!remove_file_if_exists(&file).unwrap());
    }
}
