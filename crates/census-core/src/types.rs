//! Records and error payloads served to HTTP callers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One decoded data row: header name to cell value, in header order.
pub type Record = IndexMap<String, Value>;

/// All decoded rows of a single upstream response.
pub type RecordList = Vec<Record>;

/// Body returned with a 500 when the upstream call could not be completed.
///
/// Serializes as `{"message": ..., "endpointError": ...}`.
///
/// # Example
///
/// ```
/// use census_core::ErrorPayload;
///
/// let payload = ErrorPayload::new("unable to query census endpoint", "boom");
/// let json = serde_json::to_string(&payload).unwrap();
/// assert_eq!(json, r#"{"message":"unable to query census endpoint","endpointError":"boom"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    /// Human readable summary of which endpoint failed
    pub message: String,
    /// Raw upstream response text or parse error text
    pub endpoint_error: String,
}

impl ErrorPayload {
    pub fn new(message: impl Into<String>, endpoint_error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            endpoint_error: endpoint_error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload_uses_camel_case_keys() {
        let payload = ErrorPayload::new("failed", "timeout");
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["message"], "failed");
        assert_eq!(json["endpointError"], "timeout");
        assert!(json.get("endpoint_error").is_none());
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut record = Record::new();
        record.insert("NATION".into(), Value::from("1"));
        record.insert("NAME".into(), Value::from("United States"));

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"NATION":"1","NAME":"United States"}"#);
    }
}
