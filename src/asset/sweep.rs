//! Verbatim mirroring of whole asset categories (icons, images, audio).

use std::path::PathBuf;

use crate::config::PackConfig;
use crate::core::{Category, PackError, PackResult};
use crate::debug;
use crate::logger::ProgressLine;

use super::{Mirror, scan_relative};

/// Files found per category, ready to be mirrored.
#[derive(Debug, Default)]
pub struct SweepPlan {
    entries: Vec<(Category, Vec<PathBuf>)>,
}

impl SweepPlan {
    /// List every category. Optional categories may be missing; others may not.
    pub fn scan(config: &PackConfig, categories: &[Category]) -> PackResult<Self> {
        let mut entries = Vec::with_capacity(categories.len());
        for &category in categories {
            let dir = config.input_dir(category);
            if !dir.is_dir() {
                if category.is_optional() {
                    debug!("assets"; "no {} directory, skipping", category.dir_name());
                    entries.push((category, Vec::new()));
                    continue;
                }
                return Err(PackError::MissingDirectory { path: dir });
            }
            entries.push((category, scan_relative(&dir)?));
        }
        Ok(Self { entries })
    }

    /// Total number of files across categories.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, files)| files.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mirror every listed file unchanged. Returns the number of files copied.
    pub fn run(&self, mirror: &mut Mirror, quiet: bool) -> PackResult<usize> {
        let progress = (!quiet && !self.is_empty()).then(|| {
            let counters: Vec<_> = self
                .entries
                .iter()
                .map(|(category, files)| (category.dir_name(), files.len()))
                .collect();
            ProgressLine::new(&counters)
        });

        let mut copied = 0;
        for (category, files) in &self.entries {
            for file in files {
                mirror.mirror_path(file, *category)?;
                copied += 1;
                if let Some(p) = &progress {
                    p.inc(category.dir_name());
                }
            }
        }

        if let Some(p) = progress {
            p.finish();
        }
        Ok(copied)
    }
}

/// Scan and mirror `categories` in one go.
///
/// In verbose mode per-file debug lines replace the progress line.
pub fn sweep(config: &PackConfig, mirror: &mut Mirror, categories: &[Category]) -> PackResult<usize> {
    SweepPlan::scan(config, categories)?.run(mirror, crate::logger::is_verbose())
}
