use crate::config::Config;
use crate::delivery::signature::build_signature;
use crate::delivery::LogSink;
use crate::pipeline::categorize::LogRecord;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
const RESOURCE_PATH: &str = "/api/logs";
const CONTENT_TYPE: &str = "application/json";

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// Client for the Log Analytics Data Collector API.
///
/// One POST per category batch. All failures are reported through the
/// `false` return of [`LogSink::deliver`]; nothing here aborts the caller.
pub struct LogAnalyticsClient {
    config: Arc<Config>,
    endpoint: String,
    http: reqwest::Client,
}

impl LogAnalyticsClient {
    pub fn new(config: Arc<Config>) -> Result<Self, DeliveryError> {
        let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        let endpoint = config.ingestion_url();

        Ok(Self {
            config,
            endpoint,
            http,
        })
    }

    async fn post(&self, body: String, log_type: &str) -> bool {
        let rfc1123_date = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();

        let signature = match build_signature(
            &self.config.workspace_id,
            &self.config.workspace_key,
            &rfc1123_date,
            body.len(),
            "POST",
            CONTENT_TYPE,
            RESOURCE_PATH,
        ) {
            Ok(signature) => signature,
            Err(e) => {
                error!(error = %e, "Failed to sign ingestion request");
                return false;
            }
        };

        let content_length = body.len();
        let response = self
            .http
            .post(&self.endpoint)
            .header("content-type", CONTENT_TYPE)
            .header("Authorization", signature)
            .header("Log-Type", log_type)
            .header("x-ms-date", rfc1123_date)
            .header("time-generated-field", "TimeGenerated")
            .body(body)
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => {
                info!(
                    bytes = content_length,
                    log_type = log_type,
                    "Posted records to Log Analytics"
                );
                true
            }
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                error!(
                    status = status,
                    body = %body,
                    log_type = log_type,
                    "Log Analytics rejected the request"
                );
                false
            }
            Err(e) => {
                error!(error = %e, log_type = log_type, "Failed to reach Log Analytics");
                false
            }
        }
    }
}

#[async_trait]
impl LogSink for LogAnalyticsClient {
    async fn deliver(&self, records: &[LogRecord], log_type: &str) -> bool {
        // Fail closed: never attempt a call we cannot sign.
        if !self.config.has_credentials() {
            error!("WORKSPACE_ID or WORKSPACE_KEY not configured");
            return false;
        }

        let body = match serde_json::to_string(records) {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, log_type = log_type, "Failed to serialize records");
                return false;
            }
        };

        self.post(body, log_type).await
    }
}
