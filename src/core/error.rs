//! Packaging error types.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures raised while packaging a project. Every variant is fatal.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("IO error on `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot copy `{}` to `{}`", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in `{}`", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot minify `{}`:\n{}", .path.display(), .errors.join("\n"))]
    Minify { path: PathBuf, errors: Vec<String> },

    #[error("required directory `{}` does not exist", .path.display())]
    MissingDirectory { path: PathBuf },

    #[error("invalid manifest `{}`: {message}", .path.display())]
    Manifest { path: PathBuf, message: String },
}

impl PackError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn manifest(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Manifest {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }
}

pub type PackResult<T> = Result<T, PackError>;
