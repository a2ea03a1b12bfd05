//! Departure time handling for Metlink predictions.
//!
//! Metlink provides times as RFC 3339 timestamps with an explicit UTC offset,
//! e.g. `2026-01-16T22:35:00+13:00`. Countdowns are whole minutes, floored
//! toward negative infinity and clamped so that a departure never shows a
//! negative number of minutes.

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

/// Display string used when a departure has no usable timestamp.
pub const NO_TIME: &str = "--:--";

/// A timestamp as reported by the API, keeping its original offset.
pub type Timestamp = DateTime<FixedOffset>;

/// Error returned when a timestamp field is present but malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {value:?}: {reason}")]
pub struct TimestampError {
    value: String,
    reason: String,
}

impl TimestampError {
    fn new(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// The offending input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Parse an RFC 3339 timestamp.
///
/// Empty input means "no timestamp" and yields `Ok(None)`.
///
/// # Examples
///
/// ```
/// use bus_sign::domain::parse_timestamp;
///
/// let ts = parse_timestamp("2026-01-16T22:35:00+13:00").unwrap().unwrap();
/// assert_eq!(ts.format("%H:%M").to_string(), "22:35");
///
/// assert!(parse_timestamp("").unwrap().is_none());
/// assert!(parse_timestamp("22:35").is_err());
/// ```
pub fn parse_timestamp(text: &str) -> Result<Option<Timestamp>, TimestampError> {
    if text.is_empty() {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(text)
        .map(Some)
        .map_err(|e| TimestampError::new(text, e.to_string()))
}

/// Read and parse a timestamp field from a JSON object.
///
/// A missing key, `null` or an empty string all mean "absent". Any other
/// non-string value is malformed.
pub fn timestamp_field(record: &Value, key: &str) -> Result<Option<Timestamp>, TimestampError> {
    match record.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => parse_timestamp(text),
        Some(other) => Err(TimestampError::new(other.to_string(), "expected a string")),
    }
}

/// Whole minutes from `now` until `when`, never negative.
///
/// The delta is floored, so 4m59s away counts as 4 minutes and 30 seconds
/// ago counts as -1 before clamping to 0.
pub fn minutes_until(now: Timestamp, when: Timestamp) -> i64 {
    let delta = when.signed_duration_since(now);
    delta.num_milliseconds().div_euclid(60_000).max(0)
}

/// Choose the time to display for a departure.
///
/// The real-time `expected` field wins over the timetabled `aimed` field.
/// Only the field in use is parsed: a malformed `aimed` is ignored when
/// `expected` is present.
pub fn pick_departure_time(record: &Value) -> Result<(Option<Timestamp>, String), TimestampError> {
    let chosen = match timestamp_field(record, "expected")? {
        Some(expected) => Some(expected),
        None => timestamp_field(record, "aimed")?,
    };

    let display = chosen
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| NO_TIME.to_string());

    Ok((chosen, display))
}
