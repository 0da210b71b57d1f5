//! Send log configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location of the persisted send log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Path of the JSON state file
    #[serde(default = "default_state_path")]
    pub path: String,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: default_state_path(),
        }
    }
}

impl StateConfig {
    pub fn path_buf(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }
}
