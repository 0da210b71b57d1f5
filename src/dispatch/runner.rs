//! Batch runner

use super::types::{RowOutcome, RunOutcome, RunReport};
use crate::config::PacingConfig;
use crate::contact::{ContactFields, mask_phone};
use crate::message::MessageComposer;
use crate::source::{Row, RowSource};
use crate::state::SendState;
use crate::transport::MessageTransport;
use crate::utils::error::Result;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Processes every row of the sheet once, in sheet order
pub struct BatchRunner<'a> {
    source: &'a dyn RowSource,
    transport: &'a dyn MessageTransport,
    composer: MessageComposer,
    pacing: PacingConfig,
}

impl<'a> BatchRunner<'a> {
    pub fn new(
        source: &'a dyn RowSource,
        transport: &'a dyn MessageTransport,
        composer: MessageComposer,
        pacing: PacingConfig,
    ) -> Self {
        Self {
            source,
            transport,
            composer,
            pacing,
        }
    }

    /// Run the batch against `state`
    ///
    /// A failed fetch returns the error and nothing is sent. Send failures
    /// are recorded on their row and do not stop the batch.
    pub async fn run(&self, mut state: SendState) -> Result<RunOutcome> {
        let rows = self.source.fetch_rows().await?;

        let mut report = RunReport {
            total_rows: rows.len(),
            ..Default::default()
        };

        for row in &rows {
            let row_id = row.row_id();
            let outcome = self.process_row(&row_id, row, &state).await;
            debug!(row_id = %row_id, outcome = outcome.label(), "Row processed");

            report.tally(&outcome);
            if let Some(record) = outcome.into_record() {
                state.record(row_id, record);
            }
        }

        info!(
            total = report.total_rows,
            sent = report.sent,
            failed = report.failed,
            bad_phone = report.bad_phone,
            not_text_preference = report.not_text_preference,
            already_sent = report.already_sent,
            "Batch finished"
        );

        Ok(RunOutcome { state, report })
    }

    async fn process_row(&self, row_id: &str, row: &Row, state: &SendState) -> RowOutcome {
        if state.is_sent(row_id) {
            return RowOutcome::AlreadySent;
        }

        let fields = ContactFields::from_row(row);
        let Some(contact) = fields.contact() else {
            warn!(row_id = %row_id, raw = %fields.raw_phone, "Skipping row with bad phone");
            return RowOutcome::BadPhone {
                raw: fields.raw_phone.to_string(),
            };
        };

        if !fields.accepts_text() {
            info!(row_id = %row_id, "Contact prefers another channel");
            return RowOutcome::NotTextPreference;
        }

        let code = self.composer.code_for(row_id);
        let body = self.composer.render(&contact.name, &code);

        match self.transport.send(&contact.phone, &body).await {
            Ok(()) => {
                info!(row_id = %row_id, to = %mask_phone(&contact.phone), code = %code, "Sent promo text");
                pause(self.pacing.after_success()).await;
                RowOutcome::Sent {
                    phone: contact.phone,
                    code,
                }
            }
            Err(e) => {
                warn!(row_id = %row_id, error = %e, "Send failed, will retry next run");
                pause(self.pacing.after_failure()).await;
                RowOutcome::SendFailed {
                    error: e.to_string(),
                }
            }
        }
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
