//! Send log types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const NOTE_BAD_PHONE: &str = "bad phone";
pub const NOTE_NOT_TEXT_PREFERENCE: &str = "not text preference";

/// Outcome recorded for one row
///
/// Fields are declared in alphabetical order so the file keeps sorted keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(default)]
    pub sent: bool,
}

impl SendRecord {
    /// Message went out
    pub fn sent(phone: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            sent: true,
            phone: Some(phone.into()),
            code: Some(code.into()),
            ..Default::default()
        }
    }

    /// Phone did not normalize; retried next run
    pub fn bad_phone(raw: impl Into<String>) -> Self {
        Self {
            sent: false,
            note: Some(NOTE_BAD_PHONE.to_string()),
            raw: Some(raw.into()),
            ..Default::default()
        }
    }

    /// Contact asked for another channel; never retried
    pub fn not_text_preference() -> Self {
        Self {
            sent: true,
            note: Some(NOTE_NOT_TEXT_PREFERENCE.to_string()),
            ..Default::default()
        }
    }

    /// Transport failed; retried next run
    pub fn send_failed(error: impl Into<String>) -> Self {
        Self {
            sent: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }
}

/// Send log keyed by row id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SendState {
    records: BTreeMap<String, SendRecord>,
}

impl SendState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the row is resolved and must not be processed again
    pub fn is_sent(&self, row_id: &str) -> bool {
        self.records.get(row_id).is_some_and(|record| record.sent)
    }

    pub fn get(&self, row_id: &str) -> Option<&SendRecord> {
        self.records.get(row_id)
    }

    /// Store the latest outcome for a row
    pub fn record(&mut self, row_id: impl Into<String>, record: SendRecord) {
        self.records.insert(row_id.into(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
