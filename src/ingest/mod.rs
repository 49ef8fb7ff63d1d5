//! One poll-extract-persist cycle.

use crate::{
    db::EmailStore,
    error::IngestError,
    extract::parse_email,
    mcp::MailboxTool,
    models::{outcome::cycle_outcome::CycleOutcome, query::unread_query::UnreadQuery},
};
use std::time::Duration;
use tracing::{error, info};

/// Run a single ingestion cycle. Errors are reported as `CycleOutcome::Failed`.
pub async fn run_cycle(
    tool: &dyn MailboxTool,
    store: &EmailStore,
    timeout: Duration,
) -> CycleOutcome {
    info!("checking unread emails");
    match ingest_latest(tool, store, timeout).await {
        Ok(outcome) => {
            info!("{outcome}");
            outcome
        }
        Err(e) => {
            error!("error checking emails: {e}");
            CycleOutcome::Failed(e.to_string())
        }
    }
}

async fn ingest_latest(
    tool: &dyn MailboxTool,
    store: &EmailStore,
    timeout: Duration,
) -> Result<CycleOutcome, IngestError> {
    let query = UnreadQuery::default();
    let payloads = tokio::time::timeout(timeout, tool.find_email(&query))
        .await
        .map_err(|_| IngestError::RemoteQueryFailed(format!("timed out after {timeout:?}")))??;

    // Only the most recent result is considered.
    let Some(text) = payloads.first() else {
        return Ok(CycleOutcome::NoData);
    };

    let parsed = parse_email(text);
    info!("email details:\n{parsed}");

    let message_id = parsed.record.message_id.clone();
    if message_id.is_empty() {
        return Err(IngestError::MalformedField("message_id"));
    }

    if store.insert(&parsed.record).await? {
        Ok(CycleOutcome::Ingested(message_id))
    } else {
        Ok(CycleOutcome::AlreadyPresent(message_id))
    }
}
