use crate::config::Config;
use crate::delivery::LogAnalyticsClient;
use crate::pipeline::Pipeline;
use crate::source::reader::{read_event_files, read_events_from, ReaderError};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("reader error: {0}")]
    Reader(#[from] ReaderError),

    #[error("delivery error: {0}")]
    Delivery(#[from] crate::delivery::DeliveryError),

    #[error("{failed} of {attempted} categories failed to deliver")]
    PartialDelivery { failed: usize, attempted: usize },
}

/// Process one batch of event messages and exit.
///
/// Each file argument is one message; with no files, each non-empty stdin
/// line is one message. Exits non-zero when any category fails to deliver
/// so a supervising host can re-drive the batch.
pub async fn run(event_files: Vec<PathBuf>) -> Result<(), RunError> {
    let config = Arc::new(Config::from_env());
    if !config.has_credentials() {
        warn!("WORKSPACE_ID or WORKSPACE_KEY not configured; deliveries will fail");
    }

    let events = if event_files.is_empty() {
        info!("Reading event messages from stdin");
        read_events_from(std::io::stdin().lock())?
    } else {
        read_event_files(&event_files)?
    };

    let sink = Arc::new(LogAnalyticsClient::new(Arc::clone(&config))?);
    let pipeline = Pipeline::new(config, sink);

    let summary = pipeline.process_batch(&events).await;
    info!(
        events = summary.events_received,
        records = summary.records_processed,
        delivered = summary.categories_delivered,
        failed = summary.categories_failed,
        "Batch finished"
    );

    if summary.categories_failed > 0 {
        return Err(RunError::PartialDelivery {
            failed: summary.categories_failed,
            attempted: summary.categories_delivered + summary.categories_failed,
        });
    }

    Ok(())
}
