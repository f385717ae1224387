use chrono::{SecondsFormat, Utc};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::warn;

/// A log record is an open mapping; records arrive from an untrusted source
/// and fields beyond the ones the pipeline stamps are passed through as-is.
pub type LogRecord = Map<String, Value>;

const CATEGORY_FIELD: &str = "category";
const DEFAULT_CATEGORY: &str = "Unknown";

/// Records grouped by category, in first-seen category order.
#[derive(Debug, Default)]
pub struct CategoryGroups {
    groups: IndexMap<String, Vec<LogRecord>>,
}

impl CategoryGroups {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of category groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Total records across all groups.
    pub fn total_records(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Iterate groups in first-seen category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[LogRecord])> {
        self.groups
            .iter()
            .map(|(category, records)| (category.as_str(), records.as_slice()))
    }

    pub fn get(&self, category: &str) -> Option<&[LogRecord]> {
        self.groups.get(category).map(Vec::as_slice)
    }

    fn push(&mut self, category: String, record: LogRecord) {
        self.groups.entry(category).or_default().push(record);
    }
}

/// Group records by category, enriching each in the same pass.
///
/// Per record: the category is read first (missing or non-string values
/// default to "Unknown"), then `SourceTenantName` is overwritten with the
/// configured tenant and `TimeGenerated` is filled if absent, copying the
/// `time` field verbatim when present and falling back to the current UTC
/// time. An existing `TimeGenerated` is never touched. Entries that are not
/// JSON objects cannot carry fields and are skipped with a warning.
///
/// Within a group, records keep their arrival order.
pub fn categorize(records: Vec<Value>, tenant_name: &str) -> CategoryGroups {
    let mut groups = CategoryGroups::default();

    for record in records {
        let mut record = match record {
            Value::Object(map) => map,
            other => {
                warn!(kind = json_kind(&other), "Skipping non-object log record");
                continue;
            }
        };

        let category = match record.get(CATEGORY_FIELD) {
            Some(Value::String(category)) => category.clone(),
            _ => DEFAULT_CATEGORY.to_string(),
        };

        record.insert(
            "SourceTenantName".to_string(),
            Value::String(tenant_name.to_string()),
        );

        if !record.contains_key("TimeGenerated") {
            let time_generated = match record.get("time") {
                Some(time) => time.clone(),
                None => Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)),
            };
            record.insert("TimeGenerated".to_string(), time_generated);
        }

        groups.push(category, record);
    }

    groups
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Vec<Value> {
        vec![value]
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let records = vec![
            json!({"category": "AuditLogs", "id": 1}),
            json!({"category": "SignInLogs", "id": 2}),
            json!({"category": "AuditLogs", "id": 3}),
            json!({"id": 4}),
        ];

        let groups = categorize(records, "Contoso");

        assert_eq!(groups.len(), 3);
        assert_eq!(groups.total_records(), 4);
        assert_eq!(groups.get("AuditLogs").unwrap().len(), 2);
        assert_eq!(groups.get("SignInLogs").unwrap().len(), 1);
        assert_eq!(groups.get("Unknown").unwrap().len(), 1);
    }

    #[test]
    fn test_groups_iterate_in_first_seen_order() {
        let records = vec![
            json!({"category": "SignInLogs"}),
            json!({"category": "AuditLogs"}),
            json!({"category": "SignInLogs"}),
            json!({"category": "ProvisioningLogs"}),
        ];

        let groups = categorize(records, "Contoso");
        let order: Vec<&str> = groups.iter().map(|(category, _)| category).collect();
        assert_eq!(order, vec!["SignInLogs", "AuditLogs", "ProvisioningLogs"]);
    }

    #[test]
    fn test_records_keep_arrival_order_within_group() {
        let records = vec![
            json!({"category": "AuditLogs", "id": 1}),
            json!({"category": "SignInLogs", "id": 2}),
            json!({"category": "AuditLogs", "id": 3}),
        ];

        let groups = categorize(records, "Contoso");
        let audit = groups.get("AuditLogs").unwrap();
        assert_eq!(audit[0]["id"], 1);
        assert_eq!(audit[1]["id"], 3);
    }

    #[test]
    fn test_source_tenant_is_always_overwritten() {
        let records = record(json!({"category": "AuditLogs", "SourceTenantName": "Stale"}));
        let groups = categorize(records, "Contoso");
        let enriched = &groups.get("AuditLogs").unwrap()[0];
        assert_eq!(enriched["SourceTenantName"], "Contoso");
    }

    #[test]
    fn test_existing_time_generated_is_preserved() {
        let records = record(json!({
            "category": "AuditLogs",
            "TimeGenerated": "2023-06-01T12:00:00Z",
            "time": "2024-01-01T00:00:00Z"
        }));

        let groups = categorize(records, "Contoso");
        let enriched = &groups.get("AuditLogs").unwrap()[0];
        assert_eq!(enriched["TimeGenerated"], "2023-06-01T12:00:00Z");
    }

    #[test]
    fn test_time_generated_copied_from_time_field() {
        let records = record(json!({"category": "AuditLogs", "time": "2024-01-01T00:00:00Z"}));
        let groups = categorize(records, "Contoso");
        let enriched = &groups.get("AuditLogs").unwrap()[0];
        assert_eq!(enriched["TimeGenerated"], "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_time_generated_synthesized_when_absent() {
        let records = record(json!({"category": "AuditLogs"}));
        let groups = categorize(records, "Contoso");
        let enriched = &groups.get("AuditLogs").unwrap()[0];

        let time_generated = enriched["TimeGenerated"].as_str().unwrap();
        assert!(time_generated.ends_with('Z'), "{time_generated}");
        assert!(
            time_generated.parse::<chrono::DateTime<Utc>>().is_ok(),
            "{time_generated}"
        );
    }

    #[test]
    fn test_non_string_category_defaults_to_unknown() {
        let records = record(json!({"category": 17}));
        let groups = categorize(records, "Contoso");
        assert_eq!(groups.get("Unknown").unwrap().len(), 1);
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let records = vec![
            json!({"category": "AuditLogs"}),
            json!("not a record"),
            json!(42),
            json!({"category": "AuditLogs"}),
        ];

        let groups = categorize(records, "Contoso");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.total_records(), 2);
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        let groups = categorize(Vec::new(), "Contoso");
        assert!(groups.is_empty());
        assert_eq!(groups.total_records(), 0);
    }
}
