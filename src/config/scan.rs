//! Scan configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Text scanning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum number of threads scanning texts at once
    pub worker_threads: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            worker_threads: num_cpus::get(),
        }
    }
}

impl Validate for ScanConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.worker_threads == 0 {
            return Err(ConfigError::ValidationError(
                "worker_threads must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
