use serde_json::Value;
use tracing::error;

/// Parse one decoded message into log records.
///
/// Entra ID diagnostic exports wrap records in a `{"records": [...]}`
/// envelope, but messages also arrive as bare arrays or single objects.
/// Resolution order:
/// 1. object with a `records` key: that key's value (an array's elements,
///    or the value itself wrapped if it is not an array)
/// 2. bare array: its elements as-is
/// 3. anything else: the value wrapped in a one-element list
///
/// A JSON decode failure is logged and yields no records; the rest of the
/// batch is unaffected.
pub fn parse_message(text: &str) -> Vec<Value> {
    let data: Value = match serde_json::from_str(text) {
        Ok(data) => data,
        Err(e) => {
            error!(error = %e, "Failed to parse event message");
            return Vec::new();
        }
    };

    match data {
        Value::Object(mut map) => match map.remove("records") {
            Some(Value::Array(records)) => records,
            Some(other) => vec![other],
            None => vec![Value::Object(map)],
        },
        Value::Array(records) => records,
        other => vec![other],
    }
}
