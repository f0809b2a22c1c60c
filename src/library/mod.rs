//! Library packaging.
//!
//! A library lives in `js/libs/<name>/` next to its descriptor:
//!
//! ```json
//! { "name": "Physics", "scripts": ["vector", "body", "world"], "preserve": ["wasm/solver.wasm"] }
//! ```
//!
//! Packing bundles the listed scripts into `main.js`, rewrites `scripts` to
//! `["main"]` and copies every `preserve` path unchanged.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::asset::{AssetPath, Mirror};
use crate::config::PackConfig;
use crate::core::{PackError, PackResult, Separator};
use crate::script::{MinifyConfig, bundle, script_paths};
use crate::utils::fs;
use crate::{debug, log};

/// Name of the generated bundle, without extension.
pub const GENERATED_SCRIPT: &str = "main";

/// Fields of a library descriptor used by the packer. Other fields pass through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LibraryDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    pub scripts: Vec<String>,
    #[serde(default)]
    pub preserve: Vec<String>,
}

/// Summary of one packed library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedLibrary {
    pub name: String,
    pub scripts: usize,
    pub preserved: usize,
}

/// Pack the library `name` from `<input>/js/libs/<name>` into `<output>/js/libs/<name>`.
pub fn pack_library(
    config: &PackConfig,
    minify: &MinifyConfig,
    mirror: &mut Mirror,
    name: &str,
) -> PackResult<PackedLibrary> {
    let input = config.libs_input().join(name);
    let output = config.libs_output().join(name);
    let descriptor_file = config.profile.manifest_file();
    let descriptor_path = input.join(descriptor_file);

    let mut manifest = fs::read_json(&descriptor_path)?;
    let descriptor = LibraryDescriptor::deserialize(&manifest)
        .map_err(|e| PackError::json(&descriptor_path, e))?;

    log!("libs"; "{}", descriptor.name.as_deref().unwrap_or(name));

    let code = bundle(&script_paths(&input, &descriptor.scripts), minify)?;

    mirror.ensure_dir(&output)?;
    fs::write(&output.join(format!("{GENERATED_SCRIPT}.js")), code)?;

    rewrite_scripts(&mut manifest, &descriptor_path)?;
    fs::write_json(&output.join(descriptor_file), &manifest)?;

    for path in &descriptor.preserve {
        preserve_file(mirror, &input, &output, path)?;
    }

    Ok(PackedLibrary {
        name: name.to_string(),
        scripts: descriptor.scripts.len(),
        preserved: descriptor.preserve.len(),
    })
}

/// Replace the `scripts` list with the single generated bundle.
fn rewrite_scripts(manifest: &mut JsonValue, path: &Path) -> PackResult<()> {
    let object = manifest
        .as_object_mut()
        .ok_or_else(|| PackError::manifest(path, "library descriptor must be an object"))?;
    object.insert(
        "scripts".to_string(),
        JsonValue::Array(vec![JsonValue::String(GENERATED_SCRIPT.to_string())]),
    );
    Ok(())
}

/// Copy `relative` (slash-separated) from the library input root to its output root.
fn preserve_file(
    mirror: &mut Mirror,
    input: &Path,
    output: &Path,
    relative: &str,
) -> PackResult<()> {
    let (dirs, leaf) = AssetPath::new(relative, Separator::Slash).split();
    let sub: PathBuf = dirs.iter().collect();

    let dest_dir = output.join(&sub);
    mirror.ensure_dir(&dest_dir)?;
    fs::copy(&input.join(&sub).join(leaf), &dest_dir.join(leaf))?;
    debug!("libs"; "preserved {}", relative);
    Ok(())
}
