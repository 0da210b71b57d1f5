//! Configuration validation
//!
//! - `trait_def`: core Validate trait definition
//! - `url_check`: http(s) URL checks
//! - `job_validators`: validators for every job configuration model

mod job_validators;
mod trait_def;
mod url_check;

pub use trait_def::Validate;
pub use url_check::validate_http_url;
