//! Packaging profiles.
//!
//! The desktop and mobile targets ship slightly different trees. Each profile
//! is an independent table; they are deliberately not merged into one rule set.

use serde::{Deserialize, Serialize};

use crate::core::Category;

/// Target the project is packaged for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Desktop shell: `package.json`, `fullScreen`
    #[default]
    Desktop,
    /// Cordova shell: `manifest.json`, `fullscreen`, ships `cordova.js`
    Mobile,
}

/// Scripts concatenated (in this order) into `js/main.js`.
const CORE_SCRIPTS: &[&str] = &["Application", "Window", "BlankEngine", "main"];

const OPTIONAL_MEDIA: &[Category] = &[Category::Img, Category::Audio];

impl Profile {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }

    /// Project manifest file name, also used for library descriptors.
    pub const fn manifest_file(self) -> &'static str {
        match self {
            Self::Desktop => "package.json",
            Self::Mobile => "manifest.json",
        }
    }

    /// Key of the full-screen flag inside the `window` record.
    pub const fn fullscreen_key(self) -> &'static str {
        match self {
            Self::Desktop => "fullScreen",
            Self::Mobile => "fullscreen",
        }
    }

    /// Files copied verbatim from the cached directory to the output root.
    pub const fn static_files(self) -> &'static [&'static str] {
        match self {
            Self::Desktop => &["index.html"],
            Self::Mobile => &["index.html", "cordova.js"],
        }
    }

    /// Libraries packed on every run, ahead of declared ones.
    pub const fn seed_libs(self) -> &'static [&'static str] {
        &["BlankEngine.Core"]
    }

    /// Shaders mirrored on every run, ahead of declared ones.
    pub const fn seed_shaders(self) -> &'static [&'static str] {
        match self {
            Self::Desktop => &[],
            Self::Mobile => &["vertex", "fragment"],
        }
    }

    /// Input root used when none is given. `None` means the argument is required.
    pub const fn default_input(self) -> Option<&'static str> {
        match self {
            Self::Desktop => Some("input"),
            Self::Mobile => None,
        }
    }

    pub const fn core_scripts(self) -> &'static [&'static str] {
        CORE_SCRIPTS
    }

    pub const fn optional_media(self) -> &'static [Category] {
        OPTIONAL_MEDIA
    }
}
