//! File helpers used when templating generated projects.
//!
//! All errors carry the path they happened on.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{KickoffError, Result};

/// Check if a file exists in a directory
pub fn has_file(dir: &Path, filename: &str) -> bool {
    dir.join(filename).exists()
}

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| KickoffError::filesystem(dir, e))
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents).map_err(|e| KickoffError::filesystem(path, e))
}

/// Remove `path` if it exists. Returns whether something was removed.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(KickoffError::filesystem(path, e)),
    }
}

/// Empty `path` if it exists. Returns whether the file was present.
pub fn truncate_if_exists(path: &Path) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    fs::write(path, "").map_err(|e| KickoffError::filesystem(path, e))?;
    Ok(true)
}

/// Put `prefix` in front of the current contents of `path`, creating the file
/// when it does not exist yet.
pub fn prepend_to_file(path: &Path, prefix: &str) -> Result<()> {
    let existing = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(KickoffError::filesystem(path, e)),
    };
    write_file(path, &format!("{prefix}{existing}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_file_creates_parents() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("src/pages/Home.jsx");

        write_file(&path, "home").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "home");
        assert!(has_file(&dir.path().join("src/pages"), "Home.jsx"));
    }

    #[test]
    fn test_remove_file_if_exists() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("App.css");
        fs::write(&path, "body {}").unwrap();

        assert!(remove_file_if_exists(&path).unwrap());
        assert!(!path.exists());
        assert!(!remove_file_if_exists(&path).unwrap());
    }

    #[test]
    fn test_truncate_if_exists() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("index.css");

        assert!(!truncate_if_exists(&path).unwrap());
        assert!(!path.exists());

        fs::write(&path, ":root { color: red; }").unwrap();
        assert!(truncate_if_exists(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_prepend_to_existing_and_missing_file() {
        let dir = tempdir().expect("Failed to create temp directory");
        let existing = dir.path().join("existing.css");
        fs::write(&existing, "body {}\n").unwrap();

        prepend_to_file(&existing, "@tailwind base;\n").unwrap();
        assert_eq!(
            fs::read_to_string(&existing).unwrap(),
            "@tailwind base;\nbody {}\n"
        );

        let missing = dir.path().join("src/missing.css");
        prepend_to_file(&missing, "@tailwind base;\n").unwrap();
        assert_eq!(fs::read_to_string(&missing).unwrap(), "@tailwind base;\n");
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let dir = tempdir().expect("Failed to create temp directory");
        let nested = dir.path().join("projects/reactjs");
        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
