//! Metlink open-data API client.
//!
//! This module provides an HTTP client for the Metlink (Greater Wellington)
//! API and the conversion of its stop-predictions payload into
//! [`DepartureView`](crate::domain::DepartureView)s.
//!
//! Key characteristics of the API:
//! - Responses are loosely typed; several fields have alternative names
//! - Times are RFC 3339 strings with a `+12:00`/`+13:00` offset
//! - Business errors come back as an `error` field in a JSON body

mod client;
mod convert;
mod error;

pub use client::{DEFAULT_BASE_URL, MetlinkClient, MetlinkConfig};
pub use convert::{ConversionError, Predictions, normalize_predictions, normalize_predictions_at};
pub use error::MetlinkError;
