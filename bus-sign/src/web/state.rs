//! Application state for the web layer.

use std::sync::Arc;

use crate::config::Config;
use crate::metlink::MetlinkClient;

/// What the sign shows and how often the page refreshes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignSettings {
    pub stop_id: String,
    pub limit: usize,
    pub refresh_secs: u32,
}

impl From<&Config> for SignSettings {
    fn from(config: &Config) -> Self {
        Self {
            stop_id: config.stop_id.clone(),
            limit: config.limit,
            refresh_secs: config.refresh_secs,
        }
    }
}

/// Shared application state.
///
/// Read-only after startup; every request works from its own copy of the
/// API response.
#[derive(Clone)]
pub struct AppState {
    /// Metlink client, `None` when no API key is configured
    pub metlink: Option<MetlinkClient>,

    /// Sign settings
    pub sign: Arc<SignSettings>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(metlink: Option<MetlinkClient>, sign: SignSettings) -> Self {
        Self {
            metlink,
            sign: Arc::new(sign),
        }
    }
}
