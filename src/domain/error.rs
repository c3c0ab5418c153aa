// src/domain/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Malformed question bank: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Cannot encode question bank: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("I/O failure at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to save questions to question bank {bank}: {source}")]
    SaveFailed {
        bank: String,
        #[source]
        source: Box<DomainError>,
    },
}

impl DomainError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DomainError::Io {
            path: path.into(),
            source,
        }
    }
}
