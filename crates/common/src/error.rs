//! Error types shared across podcut crates.

use std::path::PathBuf;

/// Top-level error type for podcut operations.
#[derive(Debug, thiserror::Error)]
pub enum PodcutError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Audio error: {message}")]
    Audio { message: String },

    #[error("Analysis error: {message}")]
    Analysis { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using PodcutError.
pub type PodcutResult<T> = Result<T, PodcutError>;

impl PodcutError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio {
            message: msg.into(),
        }
    }

    pub fn analysis(msg: impl Into<String>) -> Self {
        Self::Analysis {
            message: msg.into(),
        }
    }
}
