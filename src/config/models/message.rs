//! Message configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Template and promo code settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageConfig {
    /// Text placed before the digest in every code
    #[serde(default = "default_code_prefix")]
    pub code_prefix: String,
    /// Body template with `{name}` and `{code}` placeholders
    #[serde(default = "default_template")]
    pub template: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            code_prefix: default_code_prefix(),
            template: default_template(),
        }
    }
}
