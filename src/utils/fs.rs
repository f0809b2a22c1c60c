//! Filesystem helpers that attach the offending path to every failure.

use std::fs;
use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::core::{PackError, PackResult};

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Read a whole file as UTF-8 text.
pub fn read_text(path: &Path) -> PackResult<String> {
    fs::read_to_string(path).map_err(|e| PackError::io(path, e))
}

/// Read and parse a JSON file.
pub fn read_json(path: &Path) -> PackResult<JsonValue> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|e| PackError::json(path, e))
}

/// Serialize a value as compact JSON and write it.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> PackResult<()> {
    let json = serde_json::to_string(value).map_err(|e| PackError::json(path, e))?;
    write(path, json)
}

pub fn write(path: &Path, contents: impl AsRef<[u8]>) -> PackResult<()> {
    fs::write(path, contents).map_err(|e| PackError::io(path, e))
}

/// Copy `from` to `to`, overwriting. The parent of `to` must exist.
pub fn copy(from: &Path, to: &Path) -> PackResult<()> {
    fs::copy(from, to).map(|_| ()).map_err(|source| PackError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

pub fn create_dir_all(path: &Path) -> PackResult<()> {
    fs::create_dir_all(path).map_err(|e| PackError::io(path, e))
}

/// Destroy `dir` (if present) and recreate it empty.
pub fn recreate_dir(dir: &Path) -> PackResult<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(PackError::io(dir, e)),
    }
    create_dir_all(dir)
}

/// Collect all files under `dir` recursively, in sorted order.
///
/// Directories themselves are never returned. Unreadable entries are errors.
pub fn collect_all_files(dir: &Path) -> PackResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort(true) {
        let entry = entry.map_err(|e| PackError::io(dir, std::io::Error::other(e.to_string())))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_str().unwrap_or_default();
        if IGNORED_FILES.contains(&name) {
            continue;
        }
        files.push(entry.path());
    }
    Ok(files)
}
