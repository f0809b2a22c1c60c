//! Walking the data directory.
//!
//! Every JSON file is parsed and re-emitted compactly; every other file is
//! copied byte for byte. `build.json` at the data root additionally declares
//! the libraries, scripts and shaders of the build.

use std::path::Path;

use serde::Deserialize;

use crate::asset::{Mirror, scan_relative};
use crate::config::PackConfig;
use crate::core::{Category, PackError, PackResult};
use crate::debug;
use crate::utils::fs;

use super::{BuildDeclarations, Dependencies};

/// Declarations file, relative to the data root.
pub const DECLARATIONS_FILE: &str = "build.json";

const JSON_SUFFIX: &str = ".json";

/// Counts of processed data files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataStats {
    pub json: usize,
    pub raw: usize,
}

/// Mirror the data directory and append declarations found in it to `deps`.
pub fn collect_data(
    config: &PackConfig,
    mirror: &mut Mirror,
    deps: &mut Dependencies,
) -> PackResult<DataStats> {
    let category = Category::Data;
    let dir = config.input_dir(category);
    if !dir.is_dir() {
        return Err(PackError::MissingDirectory { path: dir });
    }

    let mut stats = DataStats::default();
    for relative in scan_relative(&dir)? {
        if !is_json(&relative) {
            mirror.mirror_path(&relative, category)?;
            stats.raw += 1;
            continue;
        }

        let target = mirror.prepare_path(&relative, category)?;
        let data = fs::read_json(&target.source)?;

        if relative == Path::new(DECLARATIONS_FILE) {
            let declarations = BuildDeclarations::deserialize(&data)
                .map_err(|e| PackError::json(&target.source, e))?;
            debug!(
                "data";
                "{}: {} libs, {} scripts, {} shaders",
                DECLARATIONS_FILE,
                declarations.libs.len(),
                declarations.scripts.len(),
                declarations.shaders.len()
            );
            deps.extend(declarations);
        }

        fs::write_json(&target.dest, &data)?;
        debug!("data"; "{}", target.dest.display());
        stats.json += 1;
    }
    Ok(stats)
}

fn is_json(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(JSON_SUFFIX))
}
