//! Common test utilities for sheet-texter
//!
//! # Usage
//!
//! ```rust
//! use crate::common::{TestEnv, fixtures::SheetFixture};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let env = TestEnv::start().await;
//!     env.serve_sheet(&SheetFixture::new().row("t1", "Ann", "5551234567")).await;
//!     // ...
//! }
//! ```

pub mod assertions;
pub mod fixtures;

pub use fixtures::{SheetFixture, TestEnv};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
