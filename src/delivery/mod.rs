pub mod client;
pub mod signature;
pub mod tables;

use crate::pipeline::categorize::LogRecord;
use async_trait::async_trait;

pub use client::{DeliveryError, LogAnalyticsClient};
pub use signature::{build_signature, SignatureError};
pub use tables::TableMap;

/// Destination for one category's worth of records.
///
/// `log_type` is the destination table name without the `_CL` suffix (the
/// ingestion API appends it). Implementations report failure through the
/// return value and must not panic or propagate errors; a failed delivery
/// only affects its own category.
#[async_trait]
pub trait LogSink: Send + Sync {
    async fn deliver(&self, records: &[LogRecord], log_type: &str) -> bool;
}
