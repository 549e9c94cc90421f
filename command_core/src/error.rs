//! Error types

use std::path::PathBuf;

/// Failure while reading interpreter context from a collaborator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("Contact provider failed: {0}")]
    Contacts(String),
}

/// Failure while loading keyword tables
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read keyword file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid keyword configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No usable synonyms for {0}")]
    EmptyTable(String),
}
