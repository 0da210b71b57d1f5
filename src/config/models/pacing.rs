//! Send pacing configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Pauses inserted after every send attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    #[serde(default = "default_after_success_ms")]
    pub after_success_ms: u64,
    #[serde(default = "default_after_failure_ms")]
    pub after_failure_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            after_success_ms: default_after_success_ms(),
            after_failure_ms: default_after_failure_ms(),
        }
    }
}

impl PacingConfig {
    /// No pauses at all
    pub fn none() -> Self {
        Self {
            after_success_ms: 0,
            after_failure_ms: 0,
        }
    }

    pub fn after_success(&self) -> Duration {
        Duration::from_millis(self.after_success_ms)
    }

    pub fn after_failure(&self) -> Duration {
        Duration::from_millis(self.after_failure_ms)
    }
}
