//! Crate-level error type.

use crate::config::ConfigError;
use crate::metlink::{ConversionError, MetlinkError};
use crate::stops::StopError;

/// Any failure while producing a sign or picking a stop.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Metlink(#[from] MetlinkError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Stops(#[from] StopError),
}
