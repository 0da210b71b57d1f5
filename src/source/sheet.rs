//! Sheet export retrieval

use super::parse::{decode_export, parse_rows};
use super::types::Row;
use crate::config::SheetConfig;
use crate::utils::error::{DispatchError, Result};
use reqwest::Client;
use tracing::{debug, info};

/// Something that yields the current set of rows
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RowSource: Send + Sync {
    /// Fetch every row, in sheet order
    async fn fetch_rows(&self) -> Result<Vec<Row>>;
}

/// Published Google Sheets CSV export
#[derive(Debug, Clone)]
pub struct SheetSource {
    client: Client,
    url: String,
}

impl SheetSource {
    /// Create a source with the configured request deadline
    pub fn new(config: &SheetConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("sheet-texter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DispatchError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.csv_url.clone(),
        })
    }
}

#[async_trait::async_trait]
impl RowSource for SheetSource {
    async fn fetch_rows(&self) -> Result<Vec<Row>> {
        debug!("Requesting sheet export");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DispatchError::fetch(format!("Sheet request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::fetch(format!(
                "Sheet export returned status: {}",
                status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DispatchError::fetch(format!("Failed to read sheet export: {}", e)))?;

        let rows = parse_rows(&decode_export(&body))?;
        info!(rows = rows.len(), "Fetched sheet export");
        Ok(rows)
    }
}
