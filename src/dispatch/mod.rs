//! The batch job
//!
//! One run fetches the sheet, decides what to do with each row, sends the
//! texts that are due and hands back the updated send log.

mod job;
mod runner;
mod types;

pub use job::{JobOptions, run_job};
pub use runner::BatchRunner;
pub use types::{RowOutcome, RunOutcome, RunReport};
