//! Transport that only logs

use super::MessageTransport;
use crate::contact::mask_phone;
use crate::utils::error::Result;
use tracing::info;

/// Logs each message instead of sending it
#[derive(Debug, Clone, Default)]
pub struct DryRunTransport;

impl DryRunTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl MessageTransport for DryRunTransport {
    async fn send(&self, to: &str, body: &str) -> Result<()> {
        info!(to = %mask_phone(to), body = %body, "[dry run] would send text");
        Ok(())
    }
}
