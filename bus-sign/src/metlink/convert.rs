//! Conversion from Metlink stop-predictions payloads to domain types.
//!
//! Each departure entry is converted on its own; output order and length
//! match the payload's `departures` array.

use chrono::Local;
use serde_json::Value;
use tracing::trace;

use crate::domain::{DepartureView, Timestamp, TimestampError, minutes_until, pick_departure_time};
use crate::fields::{first_set, first_set_text, text};

/// Error during payload to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// The API reported a business error in the body
    #[error("{0}")]
    Upstream(String),

    /// A departure carried a malformed timestamp
    #[error(transparent)]
    InvalidTimestamp(#[from] TimestampError),
}

/// Normalized predictions for one stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predictions {
    /// Human-readable stop label, e.g. "Melrose Rd (41)" or "Stop 7958"
    pub stop_label: String,
    /// Departures in API order
    pub departures: Vec<DepartureView>,
}

/// Normalize a stop-predictions payload using the current local time.
pub fn normalize_predictions(payload: &Value) -> Result<Predictions, ConversionError> {
    normalize_predictions_at(payload, Local::now().fixed_offset())
}

/// Normalize a stop-predictions payload against a fixed `now`.
///
/// All countdowns in the result are computed from the same `now`.
pub fn normalize_predictions_at(
    payload: &Value,
    now: Timestamp,
) -> Result<Predictions, ConversionError> {
    if let Some(error) = payload.get("error") {
        return Err(ConversionError::Upstream(text(error)));
    }

    let entries = payload
        .get("departures")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let stop_label = stop_label(payload, entries);

    let departures = entries
        .iter()
        .map(|entry| convert_departure(entry, now))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Predictions {
        stop_label,
        departures,
    })
}

/// Stop label: the first departure's stop name, else "Stop {stop_id}", else "Stop".
fn stop_label(payload: &Value, entries: &[Value]) -> String {
    if let Some(name) = entries.first().and_then(|e| first_set_text(e, &["name"])) {
        return name;
    }
    match first_set_text(payload, &["stop_id"]) {
        Some(stop_id) => format!("Stop {stop_id}"),
        None => "Stop".to_string(),
    }
}

/// Convert a single departure entry.
fn convert_departure(entry: &Value, now: Timestamp) -> Result<DepartureView, ConversionError> {
    let empty = Value::Null;
    let times = first_set(entry, &["departure"]).unwrap_or(&empty);
    let (when, time_str) = pick_departure_time(times)?;

    let service_id = first_set_text(entry, &["service_id", "route_short_name"])
        .unwrap_or_else(|| "?".to_string());

    let headsign = first_set_text(entry, &["trip_headsign"])
        .or_else(|| {
            entry
                .get("destination")
                .and_then(|d| first_set_text(d, &["name"]))
        })
        .unwrap_or_default();

    let status = entry.get("status").filter(|s| !s.is_null()).map(text);

    let view = DepartureView {
        service_id,
        headsign,
        minutes_away: when.map(|when| minutes_until(now, when)),
        time_str,
        status,
    };
    trace!(?view, "converted departure");

    Ok(view)
}
