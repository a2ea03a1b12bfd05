//! Web layer for the bus sign.
//!
//! Serves the sign as plain text and as an auto-refreshing HTML page.

mod routes;
mod state;
pub mod templates;

pub use routes::{AppError, create_router};
pub use state::{AppState, SignSettings};
