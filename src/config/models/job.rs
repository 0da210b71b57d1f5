//! Top-level job configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Everything one run of the job needs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobConfig {
    /// Spreadsheet export
    #[serde(default)]
    pub sheet: SheetConfig,
    /// TextNow session
    #[serde(default)]
    pub textnow: TextNowConfig,
    /// Send log location
    #[serde(default)]
    pub state: StateConfig,
    /// Message body and promo code
    #[serde(default)]
    pub message: MessageConfig,
    /// Delays between sends
    #[serde(default)]
    pub pacing: PacingConfig,
}
