//! Runtime configuration.
//!
//! Settings come from process environment variables first and a `.env` file
//! second. The configuration is loaded once at startup and passed explicitly
//! to everything that needs it.

use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

/// Stop shown when none is configured.
pub const DEFAULT_STOP_ID: &str = "7958";

/// Departures shown when no limit is configured.
pub const DEFAULT_LIMIT: usize = 2;

/// Port the sign server listens on by default.
pub const DEFAULT_PORT: u16 = 8765;

/// HTML page refresh interval by default, in seconds.
pub const DEFAULT_REFRESH_SECS: u32 = 15;

/// Shown when `METLINK_API_KEY` is missing.
pub const MISSING_KEY_HELP: &str = "Missing METLINK_API_KEY.\n\
Set it as an env var, or create a .env in this folder with:\n  \
METLINK_API_KEY=...your key...\n";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No API key was configured
    #[error("missing METLINK_API_KEY")]
    MissingCredential,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Metlink API key (`METLINK_API_KEY`)
    pub api_key: Option<String>,

    /// Default stop id (`METLINK_STOP_ID`)
    pub stop_id: String,

    /// Default number of departures, at least 1 (`METLINK_LIMIT`)
    pub limit: usize,

    /// Sign server port (`METLINK_PORT`)
    pub port: u16,

    /// HTML refresh interval in seconds (`METLINK_REFRESH_SECONDS`)
    pub refresh_secs: u32,
}

impl Config {
    /// Load from the process environment, falling back to `env_file`.
    ///
    /// A missing file is not an error. The process environment is not
    /// modified.
    pub fn load(env_file: impl AsRef<Path>) -> Self {
        let file = read_env_file(env_file.as_ref());
        Self::from_lookup(layered(|key| std::env::var(key).ok(), file))
    }

    /// Build from a key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            api_key: get("METLINK_API_KEY"),
            stop_id: get("METLINK_STOP_ID").unwrap_or_else(|| DEFAULT_STOP_ID.to_string()),
            limit: get("METLINK_LIMIT")
                .and_then(|v| parse_or_warn::<usize>("METLINK_LIMIT", &v))
                .map(|n| n.max(1))
                .unwrap_or(DEFAULT_LIMIT),
            port: get("METLINK_PORT")
                .and_then(|v| parse_or_warn("METLINK_PORT", &v))
                .unwrap_or(DEFAULT_PORT),
            refresh_secs: get("METLINK_REFRESH_SECONDS")
                .and_then(|v| parse_or_warn("METLINK_REFRESH_SECONDS", &v))
                .filter(|&n| n > 0)
                .unwrap_or(DEFAULT_REFRESH_SECS),
        }
    }

    /// The API key, or [`ConfigError::MissingCredential`].
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .ok_or(ConfigError::MissingCredential)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Look `key` up in `env`, then in `file`. An empty `env` value does not
/// hide the file's value.
fn layered(
    env: impl Fn(&str) -> Option<String>,
    file: HashMap<String, String>,
) -> impl Fn(&str) -> Option<String> {
    move |key| {
        env(key)
            .filter(|v| !v.is_empty())
            .or_else(|| file.get(key).cloned())
    }
}

fn parse_or_warn<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    let parsed = value.trim().parse().ok();
    if parsed.is_none() {
        warn!(key, value, "ignoring unparsable setting");
    }
    parsed
}

/// Read `KEY=value` pairs from a dotenv file without touching the process
/// environment.
fn read_env_file(path: &Path) -> HashMap<String, String> {
    let Ok(iter) = dotenv::from_path_iter(path) else {
        return HashMap::new();
    };

    iter.filter_map(|item| match item {
        Ok(pair) => Some(pair),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping malformed .env line");
            None
        }
    })
    .collect()
}
