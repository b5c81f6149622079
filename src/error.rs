//! Error types shared by the extractor and the translator.
//!
//! Only configuration-level problems surface as [`Error`]. Per-file parse
//! failures, per-string translation failures and per-destination write
//! failures are recovered where they happen and only logged.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("source path not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("catalog artifact not found: {}", .0.display())]
    ArtifactNotFound(PathBuf),

    #[error("translation API key is required (set TRANSLATION_API_KEY)")]
    MissingCredential,

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog artifact: {0}")]
    InvalidArtifact(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
