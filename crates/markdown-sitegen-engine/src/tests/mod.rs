//! Shared helpers for unit tests that touch the filesystem.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_site_dir() -> TempDir {
    TempDir::new().expect("create temp dir")
}

/// Writes `content` to `relative` under `dir`, creating parent directories.
pub fn create_test_file(dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    write_under(dir.path(), relative, content)
}

fn write_under(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(&path, content).expect("write test file");
    path
}
