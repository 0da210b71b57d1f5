//! Configuration management for the batch job
//!
//! This module handles loading, validation, and access to the job configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{DispatchError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the batch job
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Job configuration
    pub job: JobConfig,
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// Credentials left out of the file are taken from the environment.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DispatchError::config(format!("Failed to read config file: {}", e)))?;

        let mut job: JobConfig = serde_yaml::from_str(&content)
            .map_err(|e| DispatchError::config(format!("Failed to parse config: {}", e)))?;
        job.fill_from_env();

        let config = Self { job };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let job = JobConfig::from_env()?;
        let config = Self { job };

        config.validate()?;
        Ok(config)
    }

    /// Point the job at a different state file
    pub fn with_state_path(mut self, path: impl Into<String>) -> Self {
        self.job.state.path = path.into();
        self
    }

    /// Get sheet configuration
    pub fn sheet(&self) -> &SheetConfig {
        &self.job.sheet
    }

    /// Get TextNow configuration
    pub fn textnow(&self) -> &TextNowConfig {
        &self.job.textnow
    }

    /// Get state file configuration
    pub fn state(&self) -> &StateConfig {
        &self.job.state
    }

    /// Get message configuration
    pub fn message(&self) -> &MessageConfig {
        &self.job.message
    }

    /// Get pacing configuration
    pub fn pacing(&self) -> &PacingConfig {
        &self.job.pacing
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        self.job.validate().map_err(DispatchError::Config)
    }
}
