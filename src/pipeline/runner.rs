use crate::config::Config;
use crate::delivery::{LogSink, TableMap};
use crate::pipeline::categorize::categorize;
use crate::source::envelope::EventEnvelope;
use crate::source::parser::parse_message;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Outcome of one batch invocation.
///
/// The event-trigger host ignores this; the CLI uses it for its exit status
/// and tests assert on it.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub events_received: usize,
    pub events_skipped: usize,
    pub records_processed: usize,
    pub categories_delivered: usize,
    pub categories_failed: usize,
}

/// Drives one batch through parse, categorize, and per-category delivery.
///
/// Invocations are independent: each owns its accumulated records and
/// groups, sharing only the read-only config and the sink.
pub struct Pipeline {
    config: Arc<Config>,
    tables: TableMap,
    sink: Arc<dyn LogSink>,
}

impl Pipeline {
    pub fn new(config: Arc<Config>, sink: Arc<dyn LogSink>) -> Self {
        let tables = TableMap::new(&config.tenant_name);
        Self {
            config,
            tables,
            sink,
        }
    }

    /// Process one batch of incoming messages.
    ///
    /// Messages are parsed one at a time; a message that cannot be decoded
    /// is logged and skipped without affecting its siblings. All parsed
    /// records are categorized in a single pass, then each category is
    /// delivered in first-seen order. A failed category never stops the
    /// remaining ones.
    pub async fn process_batch(&self, events: &[EventEnvelope]) -> BatchSummary {
        let invocation = Uuid::new_v4();
        info!(invocation = %invocation, events = events.len(), "Processing event batch");

        let mut summary = BatchSummary {
            events_received: events.len(),
            ..Default::default()
        };

        let mut all_records = Vec::new();
        for event in events {
            let body = match std::str::from_utf8(event.body()) {
                Ok(body) => body,
                Err(e) => {
                    error!(error = %e, "Error decoding event body");
                    summary.events_skipped += 1;
                    continue;
                }
            };

            let records = parse_message(body);
            info!(records = records.len(), "Parsed records from event");
            all_records.extend(records);
        }

        if all_records.is_empty() {
            warn!(invocation = %invocation, "No records to process");
            return summary;
        }

        let groups = categorize(all_records, &self.config.tenant_name);
        summary.records_processed = groups.total_records();

        for (category, records) in groups.iter() {
            let table_name = self.tables.table_for(category);
            // The ingestion API appends _CL itself.
            let log_type = table_name.strip_suffix("_CL").unwrap_or(table_name);

            if self.sink.deliver(records, log_type).await {
                info!(
                    count = records.len(),
                    category = category,
                    table = log_type,
                    "Delivered category records"
                );
                summary.categories_delivered += 1;
            } else {
                error!(
                    count = records.len(),
                    category = category,
                    table = log_type,
                    "Failed to deliver category records"
                );
                summary.categories_failed += 1;
            }
        }

        info!(
            invocation = %invocation,
            total = summary.records_processed,
            "Completed processing batch"
        );
        summary
    }
}
