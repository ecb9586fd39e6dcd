//! Response body normalisation.
//!
//! Listing endpoints are not consistent about their envelope: some return
//! `{ items, total }`, some `{ rows, count }`, some a bare array. Everything
//! is folded into [`Page`] here.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::Page;
use super::error::{GENERIC_FAILURE, RequestError};

/// Parse a raw response body, treating an empty or non-JSON body as `{}`
pub fn parse_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Extract the operator-facing message from a failed response body
pub fn error_message(body: &Value) -> String {
    body.get("error")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(GENERIC_FAILURE)
        .to_string()
}

/// Fold any supported listing envelope into a page.
///
/// Items that fail to decode are skipped with a warning instead of failing
/// the whole page. An unrecognised shape yields an empty page.
pub fn normalize_page<T: DeserializeOwned>(body: Value) -> Page<T> {
    let (raw_items, total) = match body {
        Value::Array(items) => (items, None),
        Value::Object(mut map) => {
            let items = match (map.remove("items"), map.remove("rows")) {
                (Some(Value::Array(items)), _) => items,
                (_, Some(Value::Array(rows))) => rows,
                _ => Vec::new(),
            };
            let total = count_field(map.get("total")).or_else(|| count_field(map.get("count")));
            (items, total)
        }
        _ => (Vec::new(), None),
    };

    let total = total.unwrap_or(raw_items.len() as u64);
    let mut items = Vec::with_capacity(raw_items.len());
    for raw in raw_items {
        match serde_json::from_value::<T>(raw) {
            Ok(item) => items.push(item),
            Err(e) => tracing::warn!("skipping malformed list item: {}", e),
        }
    }

    Page { items, total }
}

/// Decode a single record from a success body
pub fn decode_record<T: DeserializeOwned>(body: Value) -> Result<T, RequestError> {
    serde_json::from_value(body).map_err(|e| RequestError::Decode(e.to_string()))
}

fn count_field(value: Option<&Value>) -> Option<u64> {
    let n = value?.as_f64()?;
    if n.is_finite() && n >= 0.0 {
        Some(n.trunc() as u64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pack;
    use serde_json::json;

    #[test]
    fn test_items_total_envelope() {
        let page: Page<Pack> = normalize_page(json!({
            "items": [{ "id": 1 }, { "id": 2 }],
            "total": 41
        }));
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 41);
    }

    #[test]
    fn test_rows_count_envelope() {
        let page: Page<Pack> = normalize_page(json!({
            "rows": [{ "id": 9 }],
            "count": 3
        }));
        assert_eq!(page.items[0].id, 9);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_bare_array_counts_items() {
        let page: Page<Pack> = normalize_page(json!([{ "id": 1 }, { "id": 2 }, { "id": 3 }]));
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_non_numeric_total_falls_back_to_length() {
        let page: Page<Pack> = normalize_page(json!({ "items": [{ "id": 1 }], "total": "12" }));
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_unrecognised_shape_is_empty() {
        let page: Page<Pack> = normalize_page(json!({ "ok": true }));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);

        let page: Page<Pack> = normalize_page(json!("nope"));
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_malformed_items_are_skipped() {
        let page: Page<Pack> = normalize_page(json!({
            "items": [{ "id": 1 }, { "qr_code": "no id" }],
            "total": 2
        }));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(error_message(&json!({ "error": "pallet not found" })), "pallet not found");
        assert_eq!(error_message(&json!({ "error": 42 })), "Request failed");
        assert_eq!(error_message(&json!({})), "Request failed");
    }

    #[test]
    fn test_parse_body_tolerates_garbage() {
        assert_eq!(parse_body(b""), json!({}));
        assert_eq!(parse_body(b"<html>"), json!({}));
        assert_eq!(parse_body(br#"{"a":1}"#), json!({ "a": 1 }));
    }

    #[test]
    fn test_decode_record_reports_shape() {
        let err = decode_record::<Pack>(json!({})).unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
    }
}
