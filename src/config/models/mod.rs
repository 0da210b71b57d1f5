//! Configuration data models
//!
//! This module defines all configuration structures used by the batch job.

#![allow(missing_docs)]

pub mod job;
pub mod message;
pub mod pacing;
pub mod sheet;
pub mod state;
pub mod textnow;

// Re-export all configuration types
pub use job::*;
pub use message::*;
pub use pacing::*;
pub use sheet::*;
pub use state::*;
pub use textnow::*;

/// Default timeout for the sheet export request in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default TextNow API base URL
pub fn default_api_base() -> String {
    "https://www.textnow.com".to_string()
}

/// Default location of the send log
pub fn default_state_path() -> String {
    "sent_state.json".to_string()
}

/// Default promo code prefix
pub fn default_code_prefix() -> String {
    "ADP".to_string()
}

/// Default message template
pub fn default_template() -> String {
    concat!(
        "Hey {name}, this is A Dreamer Production. ",
        "Your 10% off code is {code}. ",
        "Show this at checkout to redeem. ",
        "Reply STOP to opt out."
    )
    .to_string()
}

/// Pause after a successful send in milliseconds
pub fn default_after_success_ms() -> u64 {
    2000
}

/// Pause after a failed send in milliseconds
pub fn default_after_failure_ms() -> u64 {
    1000
}
