//! Loading the two input streams from JSON.
//!
//! Content files hold either `{ "posts": [...] }` or a bare array of events;
//! sales files hold either `{ "daily_sales": [...] }` or a bare array. Any
//! malformed record fails the whole load; nothing is skipped silently.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::types::{ContentEvent, DailySale};

/// Parse content events from a JSON string.
pub fn parse_content(json: &str) -> Result<Vec<ContentEvent>> {
    decode_list(json, "posts")
}

/// Parse daily sales from a JSON string.
pub fn parse_sales(json: &str) -> Result<Vec<DailySale>> {
    decode_list(json, "daily_sales")
}

/// Load content events from a JSON file.
pub fn load_content(path: &Path) -> Result<Vec<ContentEvent>> {
    let events = parse_content(&std::fs::read_to_string(path)?)?;
    tracing::debug!(path = %path.display(), count = events.len(), "Loaded content events");
    Ok(events)
}

/// Load daily sales from a JSON file.
pub fn load_sales(path: &Path) -> Result<Vec<DailySale>> {
    let sales = parse_sales(&std::fs::read_to_string(path)?)?;
    tracing::debug!(path = %path.display(), count = sales.len(), "Loaded daily sales");
    Ok(sales)
}

/// Decode a list stored either bare or under `key` of a top-level object.
fn decode_list<T: DeserializeOwned>(json: &str, key: &str) -> Result<Vec<T>> {
    let value = match serde_json::from_str::<Value>(json)? {
        Value::Object(mut map) if map.contains_key(key) => map.remove(key).unwrap_or(Value::Null),
        other => other,
    };
    Ok(serde_json::from_value(value)?)
}
