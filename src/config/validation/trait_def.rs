//! Validation trait definition
//!
//! This module defines the Validate trait implemented by every configuration model.

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
