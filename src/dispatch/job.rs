//! One full invocation: load, run, persist

use super::runner::BatchRunner;
use super::types::{RunOutcome, RunReport};
use crate::config::Config;
use crate::message::MessageComposer;
use crate::source::SheetSource;
use crate::state::StateStore;
use crate::transport::MessageTransport;
use crate::utils::error::Result;
use tracing::info;

/// Switches for a single invocation
#[derive(Debug, Clone, Copy, Default)]
pub struct JobOptions {
    /// Leave the state file untouched
    pub dry_run: bool,
}

/// Run the job end to end
///
/// The state file is only written after the whole batch went through, so
/// a fetch failure leaves it exactly as it was.
pub async fn run_job(
    config: &Config,
    transport: &dyn MessageTransport,
    options: JobOptions,
) -> Result<RunReport> {
    let store = StateStore::new(config.state().path_buf());
    let state = store.load().await?;
    info!(entries = state.len(), "Loaded send log");

    let source = SheetSource::new(config.sheet())?;
    let runner = BatchRunner::new(
        &source,
        transport,
        MessageComposer::new(config.message()),
        config.pacing().clone(),
    );

    let RunOutcome { state, report } = runner.run(state).await?;

    if options.dry_run {
        info!("Dry run, send log not written");
    } else {
        store.save(&state).await?;
        info!(entries = state.len(), "Saved send log to {}", store.path().display());
    }

    Ok(report)
}
