//! Mirroring files from the input tree into the output tree.
//!
//! Declared names such as `scenes/title` are split on their category's
//! separator. Files found on disk keep their own path components, so a file
//! name containing a separator character is never split.
//! The directory part is rebuilt under `output/<category>/`.
//!
//! ```text
//! input/icon/ui/buttons/ok.png  ->  output/icon/ui/buttons/ok.png
//! input/js/scenes/title.js      ->  output/js/scenes/title.js   (forced ".js")
//! ```

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use crate::core::{Category, PackResult, Separator};
use crate::debug;
use crate::utils::fs;

/// A relative path in a category-specific separator convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetPath<'a> {
    raw: &'a str,
    separator: Separator,
}

impl<'a> AssetPath<'a> {
    pub const fn new(raw: &'a str, separator: Separator) -> Self {
        Self { raw, separator }
    }

    /// Split into directory components and leaf name.
    ///
    /// Empty and `.` components are dropped.
    pub fn split(&self) -> (Vec<&'a str>, &'a str) {
        let mut parts: Vec<&str> = self
            .raw
            .split(self.separator.as_char())
            .filter(|part| !part.is_empty() && *part != ".")
            .collect();
        let leaf = parts.pop().unwrap_or_default();
        (parts, leaf)
    }
}

/// Append `extension` unless the leaf already carries it.
fn with_extension(leaf: &OsStr, extension: &str) -> OsString {
    let mut name = leaf.to_os_string();
    if !extension.is_empty() && !leaf.as_encoded_bytes().ends_with(extension.as_bytes()) {
        name.push(extension);
    }
    name
}

/// Source and destination of one mirrored file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorTarget {
    pub source: PathBuf,
    pub dest: PathBuf,
}

/// Copies files between two roots, creating each destination directory once.
#[derive(Debug)]
pub struct Mirror {
    input: PathBuf,
    output: PathBuf,
    created: FxHashSet<PathBuf>,
}

impl Mirror {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            created: FxHashSet::default(),
        }
    }

    /// Compute source/destination for a declared name and make sure the
    /// destination directory exists.
    pub fn prepare(
        &mut self,
        relative: &str,
        category: Category,
        extension: &str,
        separator: Separator,
    ) -> PackResult<MirrorTarget> {
        let (dirs, leaf) = AssetPath::new(relative, separator).split();
        self.target(
            dirs.into_iter().map(OsStr::new),
            OsStr::new(leaf),
            category,
            extension,
        )
    }

    /// Same as [`Mirror::prepare`] for a path listed from disk, relative to
    /// `input/<category>`.
    pub fn prepare_path(&mut self, relative: &Path, category: Category) -> PackResult<MirrorTarget> {
        let leaf = relative.file_name().unwrap_or_default();
        let dirs = relative.parent().into_iter().flat_map(Path::iter);
        self.target(dirs, leaf, category, "")
    }

    fn target<'p>(
        &mut self,
        dirs: impl IntoIterator<Item = &'p OsStr>,
        leaf: &OsStr,
        category: Category,
        extension: &str,
    ) -> PackResult<MirrorTarget> {
        let file_name = with_extension(leaf, extension);

        let mut source = self.input.join(category.dir_name());
        let mut dest_dir = self.output.join(category.dir_name());
        for dir in dirs {
            source.push(dir);
            dest_dir.push(dir);
        }
        source.push(&file_name);

        self.ensure_dir(&dest_dir)?;
        Ok(MirrorTarget {
            source,
            dest: dest_dir.join(file_name),
        })
    }

    /// Copy `input/<category>/<relative><extension>` to the mirrored output path.
    pub fn mirror(
        &mut self,
        relative: &str,
        category: Category,
        extension: &str,
        separator: Separator,
    ) -> PackResult<PathBuf> {
        let target = self.prepare(relative, category, extension, separator)?;
        copy_target(category, target)
    }

    /// Copy a file listed from disk to the same place under the output root.
    pub fn mirror_path(&mut self, relative: &Path, category: Category) -> PackResult<PathBuf> {
        let target = self.prepare_path(relative, category)?;
        copy_target(category, target)
    }

    /// Create `dir` (and ancestors) unless this run already did.
    pub fn ensure_dir(&mut self, dir: &Path) -> PackResult<()> {
        if self.created.contains(dir) {
            return Ok(());
        }
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        self.created.insert(dir.to_path_buf());
        Ok(())
    }

    /// Number of distinct destination directories ensured so far.
    #[cfg(test)]
    pub fn ensured_dirs(&self) -> usize {
        self.created.len()
    }
}

fn copy_target(category: Category, target: MirrorTarget) -> PackResult<PathBuf> {
    fs::copy(&target.source, &target.dest)?;
    debug!(category.dir_name(); "{}", target.dest.display());
    Ok(target.dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Mirror) {
        let dir = TempDir::new().unwrap();
        let mirror = Mirror::new(dir.path().join("input"), dir.path().join("output"));
        (dir, mirror)
    }

    #[test]
    fn test_split_backslash() {
        let (dirs, leaf) = AssetPath::new("ui\\buttons\\ok.png", Separator::Backslash).split();
        assert_eq!(dirs, vec!["ui", "buttons"]);
        assert_eq!(leaf, "ok.png");
    }

    #[test]
    fn test_split_flat_name() {
        let (dirs, leaf) = AssetPath::new("vertex", Separator::Slash).split();
        assert!(dirs.is_empty());
        assert_eq!(leaf, "vertex");
    }

    #[test]
    fn test_split_ignores_other_separator() {
        let (dirs, leaf) = AssetPath::new("a/b", Separator::Backslash).split();
        assert!(dirs.is_empty());
        assert_eq!(leaf, "a/b");
    }

    #[test]
    fn test_extension_appended_once() {
        assert_eq!(with_extension(OsStr::new("a"), ".js"), "a.js");
        assert_eq!(with_extension(OsStr::new("b.js"), ".js"), "b.js");
        assert_eq!(with_extension(OsStr::new("icon.png"), ""), "icon.png");
    }

    #[test]
    fn test_mirror_nested_copies_bytes() {
        let (dir, mut mirror) = setup();
        let src_dir = dir.path().join("input/icon/a/b");
        stdfs::create_dir_all(&src_dir).unwrap();
        stdfs::write(src_dir.join("c.png"), [0u8, 159, 146, 150]).unwrap();

        let dest = mirror
            .mirror("a\\b\\c.png", Category::Icon, "", Separator::Backslash)
            .unwrap();
        assert_eq!(dest, dir.path().join("output/icon/a/b/c.png"));
        assert_eq!(stdfs::read(&dest).unwrap(), vec![0u8, 159, 146, 150]);
    }

    #[test]
    fn test_mirror_creates_shared_dirs_once() {
        let (dir, mut mirror) = setup();
        let src = dir.path().join("input/img/a/b");
        stdfs::create_dir_all(&src).unwrap();
        for name in ["c.png", "d.png"] {
            stdfs::write(src.join(name), name).unwrap();
        }
        stdfs::write(dir.path().join("input/img/a/e.png"), "e").unwrap();

        for rel in ["a\\b\\c.png", "a\\b\\d.png", "a\\e.png"] {
            mirror
                .mirror(rel, Category::Img, "", Separator::Backslash)
                .unwrap();
        }
        // output/img/a/b and output/img/a
        assert_eq!(mirror.ensured_dirs(), 2);
        assert!(dir.path().join("output/img/a/b/d.png").is_file());
        assert!(dir.path().join("output/img/a/e.png").is_file());
    }

    #[test]
    fn test_mirror_forced_extension() {
        let (dir, mut mirror) = setup();
        let src = dir.path().join("input/js/scenes");
        stdfs::create_dir_all(&src).unwrap();
        stdfs::write(src.join("title.js"), "var t;").unwrap();

        let dest = mirror
            .mirror("scenes/title", Category::Js, ".js", Separator::Slash)
            .unwrap();
        assert_eq!(dest, dir.path().join("output/js/scenes/title.js"));

        let dest = mirror
            .mirror("scenes/title.js", Category::Js, ".js", Separator::Slash)
            .unwrap();
        assert_eq!(dest, dir.path().join("output/js/scenes/title.js"));
        assert!(!dir.path().join("output/js/scenes/title.js.js").exists());
    }

    #[test]
    fn test_mirror_path_keeps_components() {
        let (dir, mut mirror) = setup();
        let src = dir.path().join("input/icon/ui");
        stdfs::create_dir_all(&src).unwrap();
        stdfs::write(src.join("ok.png"), "ok").unwrap();

        let dest = mirror
            .mirror_path(Path::new("ui/ok.png"), Category::Icon)
            .unwrap();
        assert_eq!(dest, dir.path().join("output/icon/ui/ok.png"));
        assert_eq!(stdfs::read_to_string(dest).unwrap(), "ok");
    }

    #[cfg(unix)]
    #[test]
    fn test_mirror_path_does_not_split_backslash_names() {
        let (dir, mut mirror) = setup();
        let src = dir.path().join("input/icon");
        stdfs::create_dir_all(&src).unwrap();
        stdfs::write(src.join("a\\b.png"), "ab").unwrap();

        let dest = mirror
            .mirror_path(Path::new("a\\b.png"), Category::Icon)
            .unwrap();
        assert_eq!(dest, dir.path().join("output/icon/a\\b.png"));
        assert!(!dir.path().join("output/icon/a").exists());
    }

    #[test]
    fn test_mirror_missing_source_fails() {
        let (dir, mut mirror) = setup();
        let err = mirror
            .mirror("ghost", Category::Shaders, ".glsl", Separator::Slash)
            .unwrap_err();
        assert!(err.to_string().contains("ghost.glsl"));
        // destination directory is still prepared
        assert!(dir.path().join("output/shaders").is_dir());
    }
}
