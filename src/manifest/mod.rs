//! Project manifest normalization.

mod normalize;

use normalize::{normalize, window_fields};

use crate::config::PackConfig;
use crate::core::PackResult;
use crate::utils::fs;
use crate::{debug, log};

/// Read the project manifest, strip default window fields and write it to the output root.
pub fn normalize_manifest(config: &PackConfig) -> PackResult<()> {
    let file = config.profile.manifest_file();
    let source = config.input.join(file);
    let dest = config.output.join(file);

    let mut manifest = fs::read_json(&source)?;
    let stripped = normalize(&mut manifest, &window_fields(config.profile));
    if stripped.is_empty() {
        debug!("manifest"; "no default fields in {}", file);
    } else {
        log!("manifest"; "{}: stripped {}", file, stripped.join(", "));
    }
    fs::write_json(&dest, &manifest)
}
