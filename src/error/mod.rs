//! Error module for Kapu.
//!
//! The sensitive trie itself cannot fail. Errors come from the layers around
//! it: reading word lists, loading configuration, and serializing results.

use std::path::PathBuf;
use thiserror::Error;

pub mod config;

/// Result type alias used throughout Kapu.
pub type KapuResult<T> = Result<T, KapuError>;

/// Core error enum for Kapu.
#[derive(Error, Debug)]
pub enum KapuError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A word list or text file that is not valid UTF-8.
    #[error("File is not valid UTF-8: {}", path.display())]
    InvalidUtf8 {
        /// The offending file
        path: PathBuf,
    },

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
