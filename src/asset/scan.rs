//! Listing input directories as category-relative asset paths.

use std::path::{Path, PathBuf};

use crate::core::PackResult;
use crate::utils::fs::collect_all_files;

/// List every file under `dir` as a path relative to `dir`.
///
/// ```text
/// icon/
/// ├── app.png          -> "app.png"
/// └── store/
///     └── 512.png      -> "store/512.png"
/// ```
pub fn scan_relative(dir: &Path) -> PackResult<Vec<PathBuf>> {
    Ok(collect_all_files(dir)?
        .into_iter()
        .map(|path| match path.strip_prefix(dir) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => path,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_relative_nested() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("store/large")).unwrap();
        fs::write(dir.path().join("app.png"), "a").unwrap();
        fs::write(dir.path().join("store/large/512.png"), "b").unwrap();

        let files = scan_relative(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from("app.png"), PathBuf::from("store/large/512.png")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_keeps_backslash_in_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a\\b.png"), "ab").unwrap();

        let files = scan_relative(dir.path()).unwrap();
        assert_eq!(files, vec![PathBuf::from("a\\b.png")]);
        assert_eq!(files[0].components().count(), 1);
    }

    #[test]
    fn test_scan_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(scan_relative(dir.path()).unwrap().is_empty());
    }
}
