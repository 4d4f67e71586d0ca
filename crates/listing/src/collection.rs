//! Parsing a provider document into a vehicle collection.

use std::time::Instant;

use serde_json::Value;
use tracing::{info, warn};

use crate::error::CollectionError;
use crate::types::VehicleRecord;

/// Parse a JSON document into the source collection.
///
/// The top-level value must be an array. Entries that are not JSON objects
/// cannot describe a vehicle and are dropped; everything else is kept in
/// document order.
pub fn parse_collection(bytes: &[u8]) -> Result<Vec<VehicleRecord>, CollectionError> {
    let start = Instant::now();
    let document: Value = serde_json::from_slice(bytes)?;

    let entries = match document {
        Value::Array(entries) => entries,
        other => {
            let err = CollectionError::NotAnArray(kind_of(&other));
            warn!(error = %err, "collection_rejected");
            return Err(err);
        }
    };

    let total = entries.len();
    let records: Vec<VehicleRecord> = entries
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    let dropped = total - records.len();
    if dropped > 0 {
        warn!(dropped, total, "collection_entries_dropped");
    }
    info!(
        records = records.len(),
        elapsed_micros = start.elapsed().as_micros(),
        "collection_parsed"
    );
    Ok(records)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
