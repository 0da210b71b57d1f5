//! TextNow web session transport

use super::MessageTransport;
use crate::config::TextNowConfig;
use crate::contact::mask_phone;
use crate::utils::error::{DispatchError, Result};
use reqwest::Client;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

const SEND_TIMEOUT: Duration = Duration::from_secs(30);
const ERROR_BODY_LIMIT: usize = 200;

/// Message payload accepted by the TextNow web API
#[derive(Debug, Serialize)]
struct OutgoingMessage<'a> {
    contact_value: &'a str,
    contact_type: u8,
    message: &'a str,
    read: u8,
    message_direction: u8,
    message_type: u8,
    from_name: &'a str,
    has_video: bool,
    new: bool,
    date: String,
}

impl<'a> OutgoingMessage<'a> {
    fn text(to: &'a str, body: &'a str) -> Self {
        Self {
            contact_value: to,
            contact_type: 2,
            message: body,
            read: 1,
            message_direction: 2,
            message_type: 1,
            from_name: "",
            has_video: false,
            new: true,
            date: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Authenticated TextNow session
///
/// Authentication is the browser `connect.sid` cookie; no password is used.
#[derive(Debug, Clone)]
pub struct TextNowTransport {
    client: Client,
    messages_url: Url,
}

impl TextNowTransport {
    /// Build the session from the configured username and cookie
    pub fn connect(config: &TextNowConfig) -> Result<Self> {
        let mut cookie = HeaderValue::from_str(&format!("connect.sid={}", config.sid_cookie))
            .map_err(|e| DispatchError::config(format!("Invalid TextNow session cookie: {}", e)))?;
        cookie.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, cookie);

        let client = Client::builder()
            .timeout(SEND_TIMEOUT)
            .default_headers(headers)
            .user_agent(concat!("sheet-texter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DispatchError::config(format!("Failed to build HTTP client: {}", e)))?;

        let messages_url = Self::messages_url(&config.api_base, &config.username)?;
        debug!(url = %messages_url, "TextNow session ready");

        Ok(Self {
            client,
            messages_url,
        })
    }

    fn messages_url(api_base: &str, username: &str) -> Result<Url> {
        let mut url = Url::parse(api_base)?;
        url.path_segments_mut()
            .map_err(|_| DispatchError::config(format!("TextNow API base cannot be a base: {}", api_base)))?
            .pop_if_empty()
            .extend(["api", "users", username, "messages"]);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl MessageTransport for TextNowTransport {
    async fn send(&self, to: &str, body: &str) -> Result<()> {
        let payload = OutgoingMessage::text(to, body);

        let response = self
            .client
            .post(self.messages_url.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|e| DispatchError::send(format!("TextNow request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let detail: String = detail.chars().take(ERROR_BODY_LIMIT).collect();
            return Err(DispatchError::send(format!(
                "TextNow returned status {}: {}",
                status,
                detail.trim()
            )));
        }

        debug!(to = %mask_phone(to), "TextNow accepted message");
        Ok(())
    }
}
