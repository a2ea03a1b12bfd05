//! Normalized departure records.

/// Status shown for a departure the API did not annotate.
pub const DEFAULT_STATUS: &str = "scheduled";

/// One upcoming departure at a stop, ready for display.
///
/// Built from exactly one source departure record and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureView {
    /// Route or service identifier (e.g. "21"), "?" if unknown.
    pub service_id: String,

    /// Rider-facing destination text, may be empty.
    pub headsign: String,

    /// Whole minutes until departure, `None` without a usable timestamp.
    pub minutes_away: Option<i64>,

    /// "HH:MM" in the timestamp's own offset, or "--:--".
    pub time_str: String,

    /// Raw status text from the API (e.g. "delayed").
    pub status: Option<String>,
}

impl DepartureView {
    /// The status to display, defaulting to "scheduled".
    pub fn display_status(&self) -> &str {
        match self.status.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => DEFAULT_STATUS,
        }
    }
}
