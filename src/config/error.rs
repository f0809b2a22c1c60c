//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

use super::Profile;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("no input project root given for the {} profile", .0.name())]
    MissingInput(Profile),
}

impl ConfigError {
    /// Usage hint printed below the error, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::MissingInput(profile) => Some(format!(
                "usage: blank-pack --profile {} <INPUT>  (or set `build.input` in pack.toml)",
                profile.name()
            )),
            _ => None,
        }
    }
}
