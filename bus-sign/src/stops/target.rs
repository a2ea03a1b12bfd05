//! Which stop the command line should show.

use super::picker::PickedStop;

/// Stop argument given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopTarget {
    /// Choose a stop from the catalog first
    Pick,
    /// Show this stop id
    Stop(String),
}

impl StopTarget {
    /// `pick` in any case selects the picker; anything else is a stop id.
    pub fn from_arg(arg: &str) -> Self {
        if arg.eq_ignore_ascii_case("pick") {
            Self::Pick
        } else {
            Self::Stop(arg.to_string())
        }
    }
}

/// Label shown above the sign: the picked stop's label when a stop was
/// picked, otherwise the label inferred from the predictions.
pub fn sign_label(picked: Option<&PickedStop>, inferred: String) -> String {
    picked.map_or(inferred, |p| p.label.clone())
}
