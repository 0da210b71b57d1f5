//! Job configuration validators

use super::trait_def::Validate;
use super::url_check::validate_http_url;
use crate::config::models::*;
use tracing::{debug, warn};

impl Validate for JobConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating job configuration");

        self.sheet.validate()?;
        self.textnow.validate()?;
        self.state.validate()?;
        self.message.validate()?;
        self.pacing.validate()?;

        debug!("Job configuration validation completed");
        Ok(())
    }
}

impl Validate for SheetConfig {
    fn validate(&self) -> Result<(), String> {
        if self.csv_url.is_empty() {
            return Err("Sheet CSV URL is required".to_string());
        }
        validate_http_url(&self.csv_url, "Sheet CSV URL")?;

        if self.timeout_secs == 0 {
            return Err("Sheet timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for TextNowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.username.is_empty() {
            return Err("TextNow username is required".to_string());
        }
        if self.sid_cookie.is_empty() {
            return Err("TextNow session cookie is required".to_string());
        }
        validate_http_url(&self.api_base, "TextNow API base")
    }
}

impl Validate for StateConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("State file path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for MessageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.code_prefix.trim().is_empty() {
            return Err("Promo code prefix cannot be empty".to_string());
        }
        if !self.template.contains("{code}") {
            return Err("Message template must contain {code}".to_string());
        }
        if !self.template.contains("{name}") {
            return Err("Message template must contain {name}".to_string());
        }
        Ok(())
    }
}

impl Validate for PacingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.after_success_ms < self.after_failure_ms {
            warn!(
                after_success_ms = self.after_success_ms,
                after_failure_ms = self.after_failure_ms,
                "Pause after success is shorter than pause after failure"
            );
        }
        Ok(())
    }
}
