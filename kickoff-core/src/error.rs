use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KickoffError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to access {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed: {0}")]
    Command(String),

    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Validation(String),

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KickoffError {
    /// Wrap an I/O error with the path it happened on.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KickoffError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, KickoffError>;
