//! Spreadsheet export configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where and how to fetch the sheet export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Published CSV export URL
    #[serde(default)]
    pub csv_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            csv_url: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl SheetConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
