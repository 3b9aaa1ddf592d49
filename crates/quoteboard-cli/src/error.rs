use std::path::PathBuf;

use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] quoteboard_core::ValidationError),

    #[error(transparent)]
    Fetch(#[from] quoteboard_core::FetchError),

    #[error("failed to read fixture '{}': {source}", path.display())]
    Fixture {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Fetch(_) => 2,
            Self::Fixture { .. } => 10,
            Self::Logging(_) => 6,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
