//! Integration tests for sheet-texter
//!
//! These tests run the whole job against mock HTTP servers and a real
//! state file.

pub mod job_tests;
