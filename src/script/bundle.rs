//! Order-preserving script bundling.

use std::path::{Path, PathBuf};

use crate::debug;
use crate::core::PackResult;
use crate::utils::fs;

use super::{MinifyConfig, minify_js};

/// Read, minify and concatenate `files` in the given order.
///
/// Units are joined without separators; later files may rely on
/// declarations made by earlier ones, so the order is never changed.
pub fn bundle<P: AsRef<Path>>(files: &[P], config: &MinifyConfig) -> PackResult<String> {
    let mut out = String::new();
    for file in files {
        let file = file.as_ref();
        let source = fs::read_text(file)?;
        let minified = minify_js(&source, config, file)?;
        debug!("bundle"; "{} ({} -> {} bytes)", file.display(), source.len(), minified.len());
        out.push_str(&minified);
    }
    Ok(out)
}

/// Resolve bare script names (`.js` implied) against `root`.
pub fn script_paths<S: AsRef<str>>(root: &Path, names: &[S]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| root.join(format!("{}.js", name.as_ref())))
        .collect()
}
