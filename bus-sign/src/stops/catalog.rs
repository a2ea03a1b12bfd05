//! Stop catalog extraction.

use serde_json::Value;
use tracing::debug;

use crate::domain::StopRow;
use crate::fields::{first_non_null, is_set, text};
use crate::metlink::MetlinkClient;

use super::error::StopError;

const ID_KEYS: &[&str] = &["stop_id", "id", "stopId"];
const NAME_KEYS: &[&str] = &["stop_name", "name", "stopName"];

/// Fetch the catalog and extract its rows.
pub async fn list_stops(client: &MetlinkClient) -> Result<Vec<StopRow>, StopError> {
    let body = client.fetch_stops().await?;
    let rows = stop_rows(&body)?;
    debug!(count = rows.len(), "loaded stop catalog");
    Ok(rows)
}

/// Extract rows from a catalog body.
///
/// The body is either a bare list or `{"data": [...]}`. Entries without a
/// stop id are dropped.
pub fn stop_rows(body: &Value) -> Result<Vec<StopRow>, StopError> {
    let entries = match body {
        Value::Array(entries) => entries,
        Value::Object(obj) => match obj.get("data") {
            Some(Value::Array(entries)) => entries,
            _ => {
                return Err(StopError::UnexpectedShape(
                    "object without a `data` list".to_string(),
                ));
            }
        },
        other => {
            return Err(StopError::UnexpectedShape(format!(
                "expected a list, got {}",
                kind(other)
            )));
        }
    };

    Ok(entries.iter().filter_map(row_from_entry).collect())
}

/// Rows whose id or name contains `query`, case-insensitively.
pub fn filter_stops(rows: Vec<StopRow>, query: Option<&str>) -> Vec<StopRow> {
    match query {
        Some(q) if !q.is_empty() => rows.into_iter().filter(|r| r.matches(q)).collect(),
        _ => rows,
    }
}

fn row_from_entry(entry: &Value) -> Option<StopRow> {
    let stop_id = first_non_null(entry, ID_KEYS).map(text)?;
    let name = first_non_null(entry, NAME_KEYS)
        .or_else(|| entry.get("stop_desc").filter(|d| is_set(d)))
        .map(text)
        .unwrap_or_default();
    StopRow::new(stop_id, name)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
