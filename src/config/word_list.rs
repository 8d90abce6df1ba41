//! Word list configuration module.
//!
//! This module defines where the sensitive word list is read from and how
//! its entries are separated.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::word_list::{FileWordSource, DEFAULT_DELIMITER};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Word list configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WordListConfig {
    /// Path to the word list file
    pub path: Option<PathBuf>,

    /// String separating entries in the file
    pub delimiter: String,
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self {
            path: None,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl WordListConfig {
    /// Builds the file source this configuration describes.
    ///
    /// # Returns
    ///
    /// * `Ok(FileWordSource)` if a path is configured
    /// * `Err(ConfigError::MissingValue)` otherwise
    pub fn source(&self) -> ConfigResult<FileWordSource> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| ConfigError::MissingValue("word_list.path".to_string()))?;
        Ok(FileWordSource::with_delimiter(path, self.delimiter.clone()))
    }
}

impl Validate for WordListConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.delimiter.is_empty() {
            return Err(ConfigError::ValidationError(
                "word_list.delimiter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
