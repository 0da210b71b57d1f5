//! Error handling for the dispatcher
//!
//! This module defines all error types used throughout the batch job.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod types;

pub use types::{DispatchError, Result};
