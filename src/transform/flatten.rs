//! Flattening of nested raw records into dotted paths

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// A raw record addressed by dotted paths, e.g. `location.coordinates.latitude`.
///
/// Only leaves are kept. Arrays and nulls are leaves; empty objects are leaves too.
pub type FlatRecord = BTreeMap<String, Value>;

/// Flatten one raw record. Non-object input yields an empty record.
#[must_use]
pub fn flatten_record(value: &Value) -> FlatRecord {
    let mut out = FlatRecord::new();
    if let Value::Object(map) = value {
        flatten_into(map, None, &mut out);
    }
    out
}

/// Flatten every record of a batch, preserving order
#[must_use]
pub fn flatten_batch(records: &[Value]) -> Vec<FlatRecord> {
    records.iter().map(flatten_record).collect()
}

fn flatten_into(map: &Map<String, Value>, prefix: Option<&str>, out: &mut FlatRecord) {
    for (key, value) in map {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(inner) if !inner.is_empty() => flatten_into(inner, Some(&path), out),
            _ => {
                out.insert(path, value.clone());
            }
        }
    }
}
