//! # sheet-texter
//!
//! Sends a promo code by text message to everyone who signs up through a
//! Google Form, one run at a time.
//!
//! Each run fetches the form's response sheet as CSV, skips rows already
//! recorded as sent in a local JSON log, validates the phone number and
//! contact preference of the rest, texts the new ones through a TextNow
//! session and writes the log back.
//!
//! ```rust,no_run
//! use sheet_texter::{Config, JobOptions, TextNowTransport, run_job};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let transport = TextNowTransport::connect(config.textnow())?;
//!     let report = run_job(&config, &transport, JobOptions::default()).await?;
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod contact;
pub mod dispatch;
pub mod message;
pub mod source;
pub mod state;
pub mod transport;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use dispatch::{BatchRunner, JobOptions, RowOutcome, RunOutcome, RunReport, run_job};
pub use source::{Row, RowSource, SheetSource};
pub use state::{SendRecord, SendState, StateStore};
pub use transport::{DryRunTransport, MessageTransport, TextNowTransport};
pub use utils::error::{DispatchError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
/// Version line including the commit it was built from
pub const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Unix timestamp of the build
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
