//! Error types for the adapter layer

use std::path::PathBuf;

use thiserror::Error;
use training_domain::RepositoryError;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<AdapterError> for RepositoryError {
    fn from(err: AdapterError) -> Self {
        RepositoryError::PersistenceError {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;
