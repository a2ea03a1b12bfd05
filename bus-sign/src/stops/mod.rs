//! Metlink stop catalog and interactive stop picker.
//!
//! The catalog is fetched in full (there is no search endpoint), filtered
//! locally and presented as a numbered list.

mod catalog;
mod error;
mod picker;
mod target;

pub use catalog::{filter_stops, list_stops, stop_rows};
pub use error::StopError;
pub use picker::{PickedStop, pick_from_rows, pick_interactive};
pub use target::{StopTarget, sign_label};
