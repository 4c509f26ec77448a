use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the merger
#[derive(Error, Debug)]
pub enum MergeError {
    #[error("load error: cannot create {}: {source}", .path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
