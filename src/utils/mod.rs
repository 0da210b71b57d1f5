//! Utility modules for the batch job
//!
//! - **error**: crate error type and `Result` alias
//! - **logging**: tracing subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging setup
