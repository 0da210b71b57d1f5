//! Persisted send log
//!
//! The log maps each row id to the outcome of its last attempt. It is loaded
//! once at the start of a run and written back once at the end.

mod store;
mod types;

pub use store::StateStore;
pub use types::{NOTE_BAD_PHONE, NOTE_NOT_TEXT_PREFERENCE, SendRecord, SendState};
