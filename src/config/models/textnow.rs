//! TextNow session configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credentials for the TextNow web session
#[derive(Clone, Serialize, Deserialize)]
pub struct TextNowConfig {
    /// Account username
    #[serde(default)]
    pub username: String,
    /// Value of the `connect.sid` cookie
    #[serde(default, skip_serializing)]
    pub sid_cookie: String,
    /// API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl Default for TextNowConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            sid_cookie: String::new(),
            api_base: default_api_base(),
        }
    }
}

// Keep the session cookie out of logs
impl fmt::Debug for TextNowConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextNowConfig")
            .field("username", &self.username)
            .field(
                "sid_cookie",
                &if self.sid_cookie.is_empty() {
                    "<unset>"
                } else {
                    "<redacted>"
                },
            )
            .field("api_base", &self.api_base)
            .finish()
    }
}
