//! Outbound text message transports
//!
//! The batch runner only knows [`MessageTransport`]. The session behind it is
//! built once at startup and passed in.

mod dry_run;
mod textnow;

pub use dry_run::DryRunTransport;
pub use textnow::TextNowTransport;

use crate::utils::error::Result;

/// Sends one text body to one destination number
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MessageTransport: Send + Sync {
    /// Send `body` to `to`, an E.164 number
    async fn send(&self, to: &str, body: &str) -> Result<()>;
}
