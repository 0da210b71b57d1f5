//! Configuration loading utilities
//!
//! This module reads job settings from environment variables. Lookups go
//! through a closure so tests never have to touch the process environment.

use super::models::*;
use crate::utils::error::{DispatchError, Result};
use std::env;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

pub const SHEET_CSV_URL: &str = "SHEET_CSV_URL";
pub const TEXTNOW_USERNAME: &str = "TEXTNOW_USERNAME";
pub const TEXTNOW_SID_COOKIE: &str = "TEXTNOW_SID_COOKIE";
pub const TEXTNOW_API_BASE: &str = "TEXTNOW_API_BASE";
pub const SENT_STATE_FILE: &str = "SENT_STATE_FILE";
pub const CODE_PREFIX: &str = "CODE_PREFIX";
pub const MESSAGE_TEMPLATE: &str = "MESSAGE_TEMPLATE";
pub const SHEET_TIMEOUT_SECS: &str = "SHEET_TIMEOUT_SECS";
pub const PACE_AFTER_SUCCESS_MS: &str = "PACE_AFTER_SUCCESS_MS";
pub const PACE_AFTER_FAILURE_MS: &str = "PACE_AFTER_FAILURE_MS";

/// Load `.env` from the working directory or its parents
///
/// A missing file is not an error; a malformed one is returned so the
/// caller can report it.
pub fn load_dotenv() -> Option<dotenvy::Error> {
    dotenv_problem(dotenvy::dotenv().map(|_| ()))
}

/// Load a specific dotenv file, with the same not-found rule as `load_dotenv`
pub fn load_dotenv_from<P: AsRef<Path>>(path: P) -> Option<dotenvy::Error> {
    dotenv_problem(dotenvy::from_path(path))
}

fn dotenv_problem(result: std::result::Result<(), dotenvy::Error>) -> Option<dotenvy::Error> {
    match result {
        Err(e) if !e.not_found() => Some(e),
        _ => None,
    }
}

impl JobConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from defaults plus whatever `lookup` provides
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_lookup(lookup)?;
        Ok(config)
    }

    /// Fill required values that are still empty from the environment
    pub fn fill_from_env(&mut self) {
        self.fill_from_lookup(|key| env::var(key).ok());
    }

    pub(crate) fn fill_from_lookup<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = non_empty(lookup);

        if self.sheet.csv_url.is_empty() {
            if let Some(url) = lookup(SHEET_CSV_URL) {
                self.sheet.csv_url = url;
            }
        }
        if self.textnow.username.is_empty() {
            if let Some(username) = lookup(TEXTNOW_USERNAME) {
                self.textnow.username = username;
            }
        }
        if self.textnow.sid_cookie.is_empty() {
            if let Some(sid) = lookup(TEXTNOW_SID_COOKIE) {
                self.textnow.sid_cookie = sid;
            }
        }
    }

    fn apply_lookup<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading configuration from environment variables");
        let lookup = non_empty(lookup);

        // Required values
        self.sheet.csv_url = required(&lookup, SHEET_CSV_URL)?;
        self.textnow.username = required(&lookup, TEXTNOW_USERNAME)?;
        self.textnow.sid_cookie = required(&lookup, TEXTNOW_SID_COOKIE)?;

        // Optional overrides
        if let Some(api_base) = lookup(TEXTNOW_API_BASE) {
            self.textnow.api_base = api_base;
        }
        if let Some(path) = lookup(SENT_STATE_FILE) {
            self.state.path = path;
        }
        if let Some(prefix) = lookup(CODE_PREFIX) {
            self.message.code_prefix = prefix;
        }
        if let Some(template) = lookup(MESSAGE_TEMPLATE) {
            self.message.template = template;
        }
        if let Some(timeout) = parsed(&lookup, SHEET_TIMEOUT_SECS)? {
            self.sheet.timeout_secs = timeout;
        }
        if let Some(ms) = parsed(&lookup, PACE_AFTER_SUCCESS_MS)? {
            self.pacing.after_success_ms = ms;
        }
        if let Some(ms) = parsed(&lookup, PACE_AFTER_FAILURE_MS)? {
            self.pacing.after_failure_ms = ms;
        }

        debug!("Configuration loaded from environment variables");
        Ok(())
    }
}

/// Treat blank variables as unset
fn non_empty<F>(lookup: F) -> impl Fn(&str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    move |key: &str| lookup(key).filter(|value| !value.trim().is_empty())
}

fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or_else(|| DispatchError::config(format!("{} is not set", key)))
}

fn parsed<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| DispatchError::config(format!("Invalid {}: {}", key, e)))
        })
        .transpose()
}
