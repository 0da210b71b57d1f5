//! Run and row outcome types

use crate::state::{SendRecord, SendState};
use serde::Serialize;
use std::fmt;

/// What happened to one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Already resolved by an earlier run
    AlreadySent,
    /// Phone number did not normalize
    BadPhone { raw: String },
    /// Contact prefers another channel
    NotTextPreference,
    /// Message went out
    Sent { phone: String, code: String },
    /// Transport failed
    SendFailed { error: String },
}

impl RowOutcome {
    /// Record to store for this row, if any
    pub fn into_record(self) -> Option<SendRecord> {
        match self {
            RowOutcome::AlreadySent => None,
            RowOutcome::BadPhone { raw } => Some(SendRecord::bad_phone(raw)),
            RowOutcome::NotTextPreference => Some(SendRecord::not_text_preference()),
            RowOutcome::Sent { phone, code } => Some(SendRecord::sent(phone, code)),
            RowOutcome::SendFailed { error } => Some(SendRecord::send_failed(error)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowOutcome::AlreadySent => "already_sent",
            RowOutcome::BadPhone { .. } => "bad_phone",
            RowOutcome::NotTextPreference => "not_text_preference",
            RowOutcome::Sent { .. } => "sent",
            RowOutcome::SendFailed { .. } => "send_failed",
        }
    }
}

/// Per-run counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub total_rows: usize,
    pub already_sent: usize,
    pub bad_phone: usize,
    pub not_text_preference: usize,
    pub sent: usize,
    pub failed: usize,
}

impl RunReport {
    /// Count one row outcome
    pub fn tally(&mut self, outcome: &RowOutcome) {
        match outcome {
            RowOutcome::AlreadySent => self.already_sent += 1,
            RowOutcome::BadPhone { .. } => self.bad_phone += 1,
            RowOutcome::NotTextPreference => self.not_text_preference += 1,
            RowOutcome::Sent { .. } => self.sent += 1,
            RowOutcome::SendFailed { .. } => self.failed += 1,
        }
    }

    /// Messages newly sent in this run
    pub fn processed(&self) -> usize {
        self.sent
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Run complete. Newly processed: {}", self.processed())
    }
}

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Send log with this run's outcomes applied
    pub state: SendState,
    pub report: RunReport,
}
