//! Domain types for the bus sign.
//!
//! Values here are built fresh for every request from raw API data and are
//! never mutated afterwards.

mod departure;
mod stop;
mod time;

pub use departure::{DEFAULT_STATUS, DepartureView};
pub use stop::StopRow;
pub use time::{
    NO_TIME, Timestamp, TimestampError, minutes_until, parse_timestamp, pick_departure_time,
    timestamp_field,
};
