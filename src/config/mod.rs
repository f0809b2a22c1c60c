//! Packaging configuration from `pack.toml` and CLI flags.
//!
//! ```toml
//! [build]
//! profile = "mobile"   # desktop | mobile
//! input = "game"       # project root, required by mobile unless given on CLI
//! output = "output"    # recreated on every run
//! cached = "cached"    # index.html, cordova.js, ...
//! ```
//!
//! Precedence: CLI flag > config file > profile default.

mod error;
mod profile;

pub use error::ConfigError;
pub use profile::Profile;

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{cli::Cli, core::Category, log};

// ============================================================================
// file configuration
// ============================================================================

/// Root structure of `pack.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub build: BuildSection,
}

/// `[build]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    pub profile: Option<Profile>,
    pub input: Option<PathBuf>,
    pub output: PathBuf,
    pub cached: PathBuf,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            profile: None,
            input: None,
            output: "output".into(),
            cached: "cached".into(),
        }
    }
}

impl ConfigFile {
    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Load from `path`, or defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {}, ignoring: {}", path.display(), ignored.join(", "));
        }
        Ok(config)
    }
}

// ============================================================================
// resolved configuration
// ============================================================================

/// Fully resolved roots and profile for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackConfig {
    pub profile: Profile,
    pub input: PathBuf,
    pub output: PathBuf,
    pub cached: PathBuf,
}

impl PackConfig {
    /// Load `pack.toml` (if any) and apply CLI overrides.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = ConfigFile::load(&cli.config)?;
        Self::resolve(file, cli)
    }

    /// Merge file settings with CLI flags.
    pub fn resolve(file: ConfigFile, cli: &Cli) -> Result<Self, ConfigError> {
        let build = file.build;
        let profile = cli.profile.or(build.profile).unwrap_or_default();

        let input = cli
            .input
            .clone()
            .or(build.input)
            .or_else(|| profile.default_input().map(PathBuf::from))
            .ok_or(ConfigError::MissingInput(profile))?;

        Ok(Self {
            profile,
            input,
            output: cli.output.clone().unwrap_or(build.output),
            cached: cli.cached.clone().unwrap_or(build.cached),
        })
    }

    /// Build a config rooted at explicit directories (used by tests and embedders).
    pub fn with_roots(profile: Profile, input: PathBuf, output: PathBuf, cached: PathBuf) -> Self {
        Self {
            profile,
            input,
            output,
            cached,
        }
    }

    pub fn input_dir(&self, category: Category) -> PathBuf {
        self.input.join(category.dir_name())
    }

    pub fn output_dir(&self, category: Category) -> PathBuf {
        self.output.join(category.dir_name())
    }

    /// Root of library sources, `<input>/js/libs`.
    pub fn libs_input(&self) -> PathBuf {
        self.input_dir(Category::Js).join("libs")
    }

    /// Root of packed libraries, `<output>/js/libs`.
    pub fn libs_output(&self) -> PathBuf {
        self.output_dir(Category::Js).join("libs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["blank-pack"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_desktop_defaults() {
        let config = PackConfig::resolve(ConfigFile::default(), &cli(&[])).unwrap();
        assert_eq!(config.profile, Profile::Desktop);
        assert_eq!(config.input, PathBuf::from("input"));
        assert_eq!(config.output, PathBuf::from("output"));
        assert_eq!(config.cached, PathBuf::from("cached"));
    }

    #[test]
    fn test_mobile_requires_input() {
        let err = PackConfig::resolve(ConfigFile::default(), &cli(&["--profile", "mobile"]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingInput(Profile::Mobile)));

        let config =
            PackConfig::resolve(ConfigFile::default(), &cli(&["--profile", "mobile", "game"]))
                .unwrap();
        assert_eq!(config.input, PathBuf::from("game"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let (file, ignored) = ConfigFile::parse_with_ignored(
            r#"
            [build]
            profile = "mobile"
            input = "from-file"
            output = "dist"
            "#,
        )
        .unwrap();
        assert!(ignored.is_empty());

        let config = PackConfig::resolve(file.clone(), &cli(&[])).unwrap();
        assert_eq!(config.profile, Profile::Mobile);
        assert_eq!(config.input, PathBuf::from("from-file"));
        assert_eq!(config.output, PathBuf::from("dist"));

        let config =
            PackConfig::resolve(file, &cli(&["--profile", "desktop", "-o", "out2", "cli-in"]))
                .unwrap();
        assert_eq!(config.profile, Profile::Desktop);
        assert_eq!(config.input, PathBuf::from("cli-in"));
        assert_eq!(config.output, PathBuf::from("out2"));
    }

    #[test]
    fn test_unknown_fields_collected() {
        let (_, ignored) = ConfigFile::parse_with_ignored(
            r#"
            [build]
            minify = false
            "#,
        )
        .unwrap();
        assert_eq!(ignored, vec!["build.minify".to_string()]);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let file = ConfigFile::load(&dir.path().join("pack.toml")).unwrap();
        assert!(file.build.profile.is_none());
        assert_eq!(file.build.output, PathBuf::from("output"));
    }

    #[test]
    fn test_paths() {
        let config = PackConfig::with_roots(
            Profile::Desktop,
            "in".into(),
            "out".into(),
            "cache".into(),
        );
        assert_eq!(config.input_dir(Category::Icon), PathBuf::from("in/icon"));
        assert_eq!(config.libs_input(), PathBuf::from("in/js/libs"));
        assert_eq!(config.libs_output(), PathBuf::from("out/js/libs"));
    }
}
