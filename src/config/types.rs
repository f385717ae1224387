use serde::{Deserialize, Serialize};

fn default_tenant_name() -> String {
    "SourceTenant".to_string()
}

/// Process-wide configuration for the forwarding pipeline.
///
/// Built once at startup (normally from the environment) and shared
/// read-only by the orchestrator and the delivery client. Keeping this an
/// explicit value rather than ad-hoc env lookups is what lets tests inject
/// fake credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log Analytics workspace ID (the customer ID for request signing)
    #[serde(default)]
    pub workspace_id: String,

    /// Log Analytics workspace primary key, base64-encoded
    #[serde(default)]
    pub workspace_key: String,

    /// Source tenant name, used to namespace destination tables
    #[serde(default = "default_tenant_name")]
    pub tenant_name: String,

    /// Override for the ingestion endpoint. When unset, the endpoint is
    /// derived from the workspace ID.
    #[serde(default)]
    pub ingestion_endpoint: Option<String>,
}

impl Config {
    pub fn new(workspace_id: &str, workspace_key: &str, tenant_name: &str) -> Self {
        Self {
            workspace_id: workspace_id.to_string(),
            workspace_key: workspace_key.to_string(),
            tenant_name: tenant_name.to_string(),
            ingestion_endpoint: None,
        }
    }

    /// Load configuration from environment variables:
    /// WORKSPACE_ID, WORKSPACE_KEY, SOURCE_TENANT_NAME, INGESTION_ENDPOINT.
    ///
    /// Missing credentials are not an error here; delivery fails closed
    /// per category until they are configured.
    pub fn from_env() -> Self {
        Self {
            workspace_id: std::env::var("WORKSPACE_ID").unwrap_or_default(),
            workspace_key: std::env::var("WORKSPACE_KEY").unwrap_or_default(),
            tenant_name: std::env::var("SOURCE_TENANT_NAME")
                .unwrap_or_else(|_| default_tenant_name()),
            ingestion_endpoint: std::env::var("INGESTION_ENDPOINT").ok(),
        }
    }

    /// Whether both the workspace ID and key are present.
    pub fn has_credentials(&self) -> bool {
        !self.workspace_id.is_empty() && !self.workspace_key.is_empty()
    }

    /// Full URL of the Data Collector API ingestion endpoint.
    pub fn ingestion_url(&self) -> String {
        match &self.ingestion_endpoint {
            Some(endpoint) => format!(
                "{}/api/logs?api-version=2016-04-01",
                endpoint.trim_end_matches('/')
            ),
            None => format!(
                "https://{}.ods.opinsights.azure.com/api/logs?api-version=2016-04-01",
                self.workspace_id
            ),
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.ingestion_endpoint = Some(endpoint.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_credentials_requires_both() {
        let config = Config::new("workspace", "a2V5", "Contoso");
        assert!(config.has_credentials());

        let no_key = Config::new("workspace", "", "Contoso");
        assert!(!no_key.has_credentials());

        let no_id = Config::new("", "a2V5", "Contoso");
        assert!(!no_id.has_credentials());
    }

    #[test]
    fn test_ingestion_url_derived_from_workspace() {
        let config = Config::new("abc-123", "a2V5", "Contoso");
        assert_eq!(
            config.ingestion_url(),
            "https://abc-123.ods.opinsights.azure.com/api/logs?api-version=2016-04-01"
        );
    }

    #[test]
    fn test_ingestion_url_override_trims_trailing_slash() {
        let config =
            Config::new("abc-123", "a2V5", "Contoso").with_endpoint("http://127.0.0.1:8080/");
        assert_eq!(
            config.ingestion_url(),
            "http://127.0.0.1:8080/api/logs?api-version=2016-04-01"
        );
    }
}
