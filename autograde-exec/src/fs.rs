//! Filesystem operations that can be repeated safely.

use std::io::{Error, ErrorKind};
use std::path::Path;

/// Make sure `path` is a directory, creating it and its parents when missing.
///
/// After a successful call the directory exists, whether it was created now or before. A path
/// that exists but is not a directory is an error.
pub fn ensure_dir(path: &Path) -> Result<&Path, Error> {
    if path.is_dir() {
        return Ok(path);
    }
    if path.exists() {
        return Err(Error::new(
            ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", path.display()),
        ));
    }
    debug!("Creating directory {}", path.display());
    std::fs::create_dir_all(path)?;
    Ok(path)
}

/// Make sure the file at `path` does not exist, removing it if present. Returns whether a file
/// was removed.
///
/// After a successful call the file is absent. Any other failure (for example missing
/// permissions, or `path` being a directory) is reported.
pub fn remove_file_if_present(path: &Path) -> Result<bool, Error> {
    match path.symlink_metadata() {
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
        Ok(_) => {}
    }
    debug!("Removing {}", path.display());
    std::fs::remove_file(path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir, write};

    use speculoos::prelude::*;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_ensure_dir() {
        let tmpdir = TempDir::new().unwrap();
        let dir = tmpdir.path().join("a/b/c");
        assert_eq!(ensure_dir(&dir).unwrap(), dir.as_path());
        assert!(dir.is_dir());
        // a second time is a no-op
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_ensure_dir_on_file() {
        let tmpdir = TempDir::new().unwrap();
        let file = tmpdir.path().join("file");
        write(&file, "x").unwrap();
        let err = ensure_dir(&file).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_remove_file_if_present() {
        let tmpdir = TempDir::new().unwrap();
        let file = tmpdir.path().join("file");
        write(&file, "x").unwrap();
        assert_that(&remove_file_if_present(&file).unwrap()).is_true();
        assert!(!file.exists());
        assert_that(&remove_file_if_present(&file).unwrap()).is_false();
    }

    #[test]
    fn test_remove_file_if_present_on_dir() {
        let tmpdir = TempDir::new().unwrap();
        let dir = tmpdir.path().join("dir");
        create_dir(&dir).unwrap();
        assert!(remove_file_if_present(&dir).is_err());
        assert!(dir.is_dir());
    }
}
