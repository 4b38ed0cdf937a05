//! Atomic file writes for configuration documents.
//!
//! Content is written to `.{filename}.tmp` next to the target, synced, and then
//! renamed over the target, so a reader never observes a half-written
//! `dependabot.yml`. The rename is atomic when source and destination share a
//! filesystem, which holds because the temp file lives in the same directory.

use crate::error::{ConfigError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write `content` to `path`, creating parent directories.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Io(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ConfigError::Io(format!(
            "failed to atomically replace '{}': {}",
            path.display(),
            e
        ))
    })?;

    sync_parent_dir(path);
    Ok(())
}

/// Persist the directory entry created by the rename.
#[cfg(unix)]
fn sync_parent_dir(path: &Path) {
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) {}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            ConfigError::Io(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        ConfigError::Io(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        ConfigError::Io(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        ConfigError::Io(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("dependabot.yml");

        atomic_write_file(&file_path, "version: 2\n").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "version: 2\n");
    }

    #[test]
    fn test_atomic_write_replace_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("dependabot.yml");
        fs::write(&file_path, "version: 1\n").unwrap();

        atomic_write_file(&file_path, "version: 2\nupdates: []\n").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "version: 2\nupdates: []\n");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join(".github").join("dependabot.yml");

        atomic_write_file(&file_path, "version: 2\n").unwrap();

        assert!(file_path.exists());
    }

    #[test]
    fn test_atomic_write_temp_file_cleanup() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("dependabot.yml");

        atomic_write_file(&file_path, "version: 2\n").unwrap();

        let temp_path = temp_dir.path().join(".dependabot.yml.tmp");
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_temp_path_for() {
        let temp = temp_path_for(Path::new("/repo/.github/dependabot.yml")).unwrap();
        assert_eq!(temp, Path::new("/repo/.github/.dependabot.yml.tmp"));
    }
}
