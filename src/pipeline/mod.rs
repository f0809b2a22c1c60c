//! Packaging pipeline.
//!
//! Phases run strictly in order; the first failure aborts the run. Nothing
//! is rolled back, the next run starts from a clean output directory.
//!
//! ```text
//! CleanOutput -> StageStaticFiles -> BundleCoreScripts -> NormalizeManifest
//!   -> MirrorIcons -> ProcessDataAndCollectDeps -> PackLibraries
//!   -> MirrorDeclaredScripts -> MirrorDeclaredShaders -> MirrorOptionalMedia
//! ```


use anyhow::{Context, Result};

use crate::{
    asset::{Mirror, sweep},
    config::PackConfig,
    core::{Category, PackResult},
    deps::{Dependencies, collect_data},
    library::pack_library,
    log,
    manifest::normalize_manifest,
    script::{MinifyConfig, bundle, script_paths},
    utils::{fs, plural_count},
};

/// Name of the bundled application script.
pub const APP_BUNDLE: &str = "main.js";

/// One step of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    CleanOutput,
    StageStaticFiles,
    BundleCoreScripts,
    NormalizeManifest,
    MirrorIcons,
    ProcessDataAndCollectDeps,
    PackLibraries,
    MirrorDeclaredScripts,
    MirrorDeclaredShaders,
    MirrorOptionalMedia,
}

impl Phase {
    /// Every phase, in execution order.
    pub const ALL: [Self; 10] = [
        Self::CleanOutput,
        Self::StageStaticFiles,
        Self::BundleCoreScripts,
        Self::NormalizeManifest,
        Self::MirrorIcons,
        Self::ProcessDataAndCollectDeps,
        Self::PackLibraries,
        Self::MirrorDeclaredScripts,
        Self::MirrorDeclaredShaders,
        Self::MirrorOptionalMedia,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::CleanOutput => "clean output",
            Self::StageStaticFiles => "stage static files",
            Self::BundleCoreScripts => "bundle core scripts",
            Self::NormalizeManifest => "normalize manifest",
            Self::MirrorIcons => "mirror icons",
            Self::ProcessDataAndCollectDeps => "process data",
            Self::PackLibraries => "pack libraries",
            Self::MirrorDeclaredScripts => "mirror scripts",
            Self::MirrorDeclaredShaders => "mirror shaders",
            Self::MirrorOptionalMedia => "mirror media",
        }
    }
}

/// What a finished run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackReport {
    pub static_files: usize,
    pub icons: usize,
    pub data_json: usize,
    pub data_raw: usize,
    pub libraries: usize,
    pub scripts: usize,
    pub shaders: usize,
    pub media: usize,
}

/// State of one packaging run.
pub struct PackRun<'a> {
    config: &'a PackConfig,
    minify: MinifyConfig,
    mirror: Mirror,
    deps: Dependencies,
    report: PackReport,
}

impl<'a> PackRun<'a> {
    pub fn new(config: &'a PackConfig) -> Self {
        Self {
            config,
            minify: MinifyConfig::PACKAGE,
            mirror: Mirror::new(&config.input, &config.output),
            deps: Dependencies::seeded(config.profile),
            report: PackReport::default(),
        }
    }

    /// Run every phase in order.
    pub fn run(mut self) -> Result<PackReport> {
        for phase in Phase::ALL {
            self.execute(phase)
                .with_context(|| format!("{} failed", phase.name()))?;
        }
        log!("done"; "{}", self.summary());
        Ok(self.report)
    }

    fn execute(&mut self, phase: Phase) -> PackResult<()> {
        let config = self.config;
        match phase {
            Phase::CleanOutput => {
                log!("pack"; "getting {} ready", config.output.display());
                fs::recreate_dir(&config.output)
            }
            Phase::StageStaticFiles => {
                log!("pack"; "staging static files");
                for file in config.profile.static_files() {
                    fs::copy(&config.cached.join(file), &config.output.join(file))?;
                    self.report.static_files += 1;
                }
                Ok(())
            }
            Phase::BundleCoreScripts => {
                log!("pack"; "bundling core scripts");
                let files = script_paths(
                    &config.input_dir(Category::Js),
                    config.profile.core_scripts(),
                );
                let code = bundle(&files, &self.minify)?;
                let out_dir = config.output_dir(Category::Js);
                self.mirror.ensure_dir(&out_dir)?;
                fs::write(&out_dir.join(APP_BUNDLE), code)
            }
            Phase::NormalizeManifest => {
                log!("pack"; "compressing manifest");
                normalize_manifest(config)
            }
            Phase::MirrorIcons => {
                log!("pack"; "copying icons");
                self.report.icons = sweep(config, &mut self.mirror, &[Category::Icon])?;
                Ok(())
            }
            Phase::ProcessDataAndCollectDeps => {
                log!("pack"; "compressing data");
                let stats = collect_data(config, &mut self.mirror, &mut self.deps)?;
                self.report.data_json = stats.json;
                self.report.data_raw = stats.raw;
                Ok(())
            }
            Phase::PackLibraries => {
                log!("pack"; "compressing libraries");
                for name in &self.deps.libs {
                    pack_library(config, &self.minify, &mut self.mirror, name)?;
                    self.report.libraries += 1;
                }
                Ok(())
            }
            Phase::MirrorDeclaredScripts => {
                log!("pack"; "copying scripts");
                self.report.scripts =
                    mirror_declared(&mut self.mirror, &self.deps.scripts, Category::Js)?;
                Ok(())
            }
            Phase::MirrorDeclaredShaders => {
                log!("pack"; "copying shaders");
                self.report.shaders =
                    mirror_declared(&mut self.mirror, &self.deps.shaders, Category::Shaders)?;
                Ok(())
            }
            Phase::MirrorOptionalMedia => {
                log!("pack"; "adding resources");
                self.report.media =
                    sweep(config, &mut self.mirror, config.profile.optional_media())?;
                Ok(())
            }
        }
    }

    fn summary(&self) -> String {
        let r = &self.report;
        format!(
            "{}, {}, {}, {}, {}",
            plural_count(r.icons + r.media, "asset"),
            plural_count(r.data_json + r.data_raw, "data file"),
            plural_count(r.libraries, "library bundle"),
            plural_count(r.scripts, "script"),
            plural_count(r.shaders, "shader"),
        )
    }
}

/// Mirror declared names with the category's forced extension.
fn mirror_declared(
    mirror: &mut Mirror,
    names: &[String],
    category: Category,
) -> PackResult<usize> {
    for name in names {
        mirror.mirror(
            name,
            category,
            category.forced_extension(),
            category.separator(),
        )?;
    }
    Ok(names.len())
}

/// Package the project described by `config`.
pub fn pack(config: &PackConfig) -> Result<PackReport> {
    PackRun::new(config).run()
}
