//! JSON file storage for the send log

use super::types::SendState;
use crate::utils::error::{DispatchError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Reads and writes the send log file
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the log; a missing file is an empty log
    pub async fn load(&self) -> Result<SendState> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No state file at {}, starting fresh", self.path.display());
                return Ok(SendState::new());
            }
            Err(e) => {
                return Err(DispatchError::state(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        let state: SendState = serde_json::from_str(&content).map_err(|e| {
            DispatchError::state(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        debug!(entries = state.len(), "Loaded state file");
        Ok(state)
    }

    /// Write the log with sorted keys and two-space indentation
    ///
    /// The content goes to a sibling temp file first and is renamed over the
    /// target, so a crash mid-write leaves the previous log intact.
    pub async fn save(&self, state: &SendState) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                DispatchError::state(format!("Failed to create state directory: {}", e))
            })?;
        }

        let content = serde_json::to_string_pretty(state)
            .map_err(|e| DispatchError::state(format!("Failed to serialize state: {}", e)))?;

        let tmp_path = self.temp_path();
        fs::write(&tmp_path, content)
            .await
            .map_err(|e| DispatchError::state(format!("Failed to write state: {}", e)))?;
        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| DispatchError::state(format!("Failed to replace state file: {}", e)))?;

        debug!(entries = state.len(), "Saved state file to {}", self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
