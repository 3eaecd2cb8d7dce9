use crate::models::ContentFile;
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a directory: {0}")]
    InvalidDirectory(PathBuf),
}

/// Read a file at an absolute path
pub fn read_path(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write a file at an absolute path, creating parent directories
pub fn write_path(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, content).map_err(IoError::Io)
}

/// Read a file relative to `root`
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    read_path(&relative_path.to_path(root))
}

/// Write a file relative to `root`
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    write_path(&relative_path.to_path(root), content)
}

/// Scan for markdown files under the content directory, sorted by path
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<ContentFile>, IoError> {
    validate_directory(content_root)?;

    let mut paths = Vec::new();
    scan_directory_recursive(content_root, &mut paths)?;

    let mut files: Vec<ContentFile> = paths
        .iter()
        .filter_map(|path| ContentFile::from_path(content_root, path))
        .collect();
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if ContentFile::is_markdown(&path) {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_directory(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDirectory(path.to_path_buf()));
    }

    Ok(())
}

/// Remove everything inside `dir`, creating it if it does not exist.
pub fn clear_directory(dir: &Path) -> Result<(), IoError> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        return Ok(());
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// Replace the contents of `dest` with a recursive copy of `src`.
///
/// Returns the number of files copied.
pub fn copy_directory(src: &Path, dest: &Path) -> Result<usize, IoError> {
    validate_directory(src)?;
    clear_directory(dest)?;
    copy_recursive(src, dest)
}

fn copy_recursive(src: &Path, dest: &Path) -> Result<usize, IoError> {
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let path = entry?.path();
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dest.join(name);

        if path.is_dir() {
            fs::create_dir_all(&target)?;
            copied += copy_recursive(&path, &target)?;
        } else {
            log::debug!("Copying {} -> {}", path.display(), target.display());
            fs::copy(&path, &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
