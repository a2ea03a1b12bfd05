//! Bus departure sign.
//!
//! Fetches stop predictions from the Metlink open-data API and renders them
//! as a fixed-width LED-style sign, for the terminal or a web page.

pub mod config;
pub mod domain;
pub mod error;
pub mod fields;
pub mod logging;
pub mod metlink;
pub mod sign;
pub mod stops;
pub mod web;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use error::Error;
