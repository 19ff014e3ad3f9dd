use std::collections::HashSet;

use async_trait::async_trait;
use log::{info, warn};
use serde_json::Value;
use thiserror::Error;

use crate::core::vehicle::VehicleRecord;

/// Errors that can occur while fetching the inventory.
///
/// None of them reach the visitor: `load_or_empty` logs the error and
/// hands back an empty inventory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Network-level failure (timeout, DNS, connection refused).
    #[error("network error: {0}")]
    Network(String),
    /// The feed answered with a non-success status.
    #[error("HTTP {status} from inventory feed")]
    Status { status: u16 },
    /// Local file could not be read.
    #[error("I/O error: {0}")]
    Io(String),
    /// Body was not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),
    /// Valid JSON, but not an array of records.
    #[error("expected a JSON array, got {0}")]
    NotAnArray(&'static str),
}

#[async_trait]
pub trait InventorySource: Send + Sync {
    /// Returns the name of the source, for logs.
    fn name(&self) -> &str;

    /// Fetch the full inventory snapshot.
    async fn fetch(&self) -> Result<Vec<VehicleRecord>, InventoryError>;
}

/// Fetch from `source`, treating every failure as an empty inventory.
pub async fn load_or_empty(source: &dyn InventorySource) -> Vec<VehicleRecord> {
    match source.fetch().await {
        Ok(records) => {
            info!("Inventory from {}: {} vehicles", source.name(), records.len());
            records
        }
        Err(e) => {
            warn!("Inventory from {} unavailable, showing none: {}", source.name(), e);
            Vec::new()
        }
    }
}

/// Decode a `cars.json` payload.
///
/// The payload must be a JSON array. Entries that are not valid records
/// (no usable `id`) are skipped, and so are repeats of an id already seen,
/// keeping the first occurrence.
pub fn decode_inventory(bytes: &[u8]) -> Result<Vec<VehicleRecord>, InventoryError> {
    let payload: Value =
        serde_json::from_slice(bytes).map_err(|e| InventoryError::Parse(e.to_string()))?;

    let entries = match payload {
        Value::Array(entries) => entries,
        other => return Err(InventoryError::NotAnArray(json_kind(&other))),
    };

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<VehicleRecord>(entry) {
            Ok(record) => {
                if seen.insert(record.id.clone()) {
                    records.push(record);
                } else {
                    warn!("Skipping entry {}: duplicate id {}", index, record.id);
                }
            }
            Err(e) => warn!("Skipping entry {}: {}", index, e),
        }
    }
    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vehicle::VehicleId;
    use crate::test_support::{StaticSource, sample_inventory};

    #[test]
    fn test_decode_array() {
        let json = br#"[{"id": 1, "title": "Clio", "price": 8000}, {"id": 2, "title": "Ibiza"}]"#;
        let records = decode_inventory(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].display_title(), "Clio");
        assert_eq!(records[1].id, VehicleId::from(2_i64));
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_inventory(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert_eq!(
            decode_inventory(br#"{"cars": []}"#),
            Err(InventoryError::NotAnArray("an object"))
        );
        assert_eq!(decode_inventory(b"null"), Err(InventoryError::NotAnArray("null")));
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        assert!(matches!(
            decode_inventory(b"<html>404</html>"),
            Err(InventoryError::Parse(_))
        ));
    }

    #[test]
    fn test_decode_skips_invalid_entries() {
        let json = br#"[{"id": 1}, "not a car", {"title": "no id"}, {"id": 2}]"#;
        let ids: Vec<String> = decode_inventory(json)
            .unwrap()
            .iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_decode_keeps_float_and_large_numeric_ids() {
        let json = br#"[{"id": 1.0}, {"id": 18446744073709551615}, {"id": 3}]"#;
        let ids: Vec<String> = decode_inventory(json)
            .unwrap()
            .iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(ids, vec!["1.0", "18446744073709551615", "3"]);
    }

    #[test]
    fn test_decode_keeps_first_duplicate() {
        let json = br#"[{"id": 1, "title": "first"}, {"id": 1, "title": "second"}]"#;
        let records = decode_inventory(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].display_title(), "first");
    }

    #[test]
    fn test_decode_preserves_order() {
        let json = br#"[{"id": 3}, {"id": 1}, {"id": "x"}, {"id": 2}]"#;
        let ids: Vec<String> = decode_inventory(json)
            .unwrap()
            .iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(ids, vec!["3", "1", "x", "2"]);
    }

    #[test]
    fn test_load_or_empty_passes_records_through() {
        let source = StaticSource(Ok(sample_inventory()));
        let records = tokio_test::block_on(load_or_empty(&source));
        assert_eq!(records, sample_inventory());
    }

    #[test]
    fn test_load_or_empty_swallows_errors() {
        let source = StaticSource(Err(InventoryError::Status { status: 503 }));
        let records = tokio_test::block_on(load_or_empty(&source));
        assert!(records.is_empty());
    }
}
