//! Stop catalog rows.

/// A stop from the catalog: id plus display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopRow {
    pub stop_id: String,
    pub name: String,
}

impl StopRow {
    /// Create a row. Returns `None` for an empty stop id, since such rows
    /// cannot be queried.
    pub fn new(stop_id: impl Into<String>, name: impl Into<String>) -> Option<Self> {
        let stop_id = stop_id.into();
        if stop_id.is_empty() {
            return None;
        }
        Some(Self {
            stop_id,
            name: name.into(),
        })
    }

    /// Label used once the stop is chosen: its name, or "Stop {id}".
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            format!("Stop {}", self.stop_id)
        } else {
            self.name.clone()
        }
    }

    /// Line shown in the picker list, e.g. "7958 Melrose Rd".
    pub fn listing(&self) -> String {
        format!("{} {}", self.stop_id, self.name).trim().to_string()
    }

    /// Case-insensitive substring match against id or name.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.stop_id.to_lowercase().contains(&query) || self.name.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_is_rejected() {
        assert!(StopRow::new("", "Nowhere").is_none());
    }

    #[test]
    fn label_falls_back_to_id() {
        let named = StopRow::new("7958", "Melrose Rd").unwrap();
        assert_eq!(named.label(), "Melrose Rd");

        let unnamed = StopRow::new("7958", "").unwrap();
        assert_eq!(unnamed.label(), "Stop 7958");
        assert_eq!(unnamed.listing(), "7958");
    }

    #[test]
    fn matches_is_case_insensitive() {
        let row = StopRow::new("WELL", "Wellington Station").unwrap();
        assert!(row.matches("station"));
        assert!(row.matches("well"));
        assert!(!row.matches("kelburn"));
    }
}
