//! Metlink HTTP client.
//!
//! Two endpoints are used: stop predictions for a single stop, and the full
//! GTFS stop list. Both return the decoded JSON body untouched; interpreting
//! it is left to the caller.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::debug;

use super::error::MetlinkError;

/// Default base URL for the Metlink open-data API.
pub const DEFAULT_BASE_URL: &str = "https://api.opendata.metlink.org.nz/v1";

/// Longest body excerpt kept in an [`MetlinkError::UpstreamHttp`].
const BODY_SNIPPET_CHARS: usize = 500;

/// Configuration for the Metlink client.
#[derive(Debug, Clone)]
pub struct MetlinkConfig {
    /// API key, sent as the `x-api-key` header
    pub api_key: String,
    /// Base URL for the API (defaults to production Metlink)
    pub base_url: String,
    /// Timeout for the stop-predictions request, in seconds
    pub predictions_timeout_secs: u64,
    /// Timeout for the stop catalog request, in seconds (the catalog is large)
    pub stops_timeout_secs: u64,
}

impl MetlinkConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            predictions_timeout_secs: 10,
            stops_timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeouts for predictions and the stop catalog.
    pub fn with_timeouts(mut self, predictions_secs: u64, stops_secs: u64) -> Self {
        self.predictions_timeout_secs = predictions_secs;
        self.stops_timeout_secs = stops_secs;
        self
    }
}

/// Metlink API client.
///
/// Makes a single attempt per call; failures are returned immediately.
#[derive(Debug, Clone)]
pub struct MetlinkClient {
    http: reqwest::Client,
    base_url: String,
    predictions_timeout: Duration,
    stops_timeout: Duration,
}

impl MetlinkClient {
    /// Create a new Metlink client with the given configuration.
    pub fn new(config: MetlinkConfig) -> Result<Self, MetlinkError> {
        let mut headers = HeaderMap::new();

        let api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| MetlinkError::InvalidApiKey)?;
        headers.insert(HeaderName::from_static("x-api-key"), api_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(MetlinkError::Build)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            predictions_timeout: Duration::from_secs(config.predictions_timeout_secs),
            stops_timeout: Duration::from_secs(config.stops_timeout_secs),
        })
    }

    /// Fetch upcoming departures for a stop.
    ///
    /// # Arguments
    ///
    /// * `stop_id` - Metlink stop id (e.g. "7958")
    /// * `limit` - Number of departures to ask the API for
    pub async fn fetch_predictions(
        &self,
        stop_id: &str,
        limit: usize,
    ) -> Result<Value, MetlinkError> {
        let url = format!("{}/stop-predictions", self.base_url);
        let query = [("stop_id", stop_id.to_string()), ("limit", limit.to_string())];
        self.get_json(&url, &query, self.predictions_timeout).await
    }

    /// Fetch the full GTFS stop catalog.
    pub async fn fetch_stops(&self) -> Result<Value, MetlinkError> {
        let url = format!("{}/gtfs/stops", self.base_url);
        self.get_json(&url, &[], self.stops_timeout).await
    }

    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
        timeout: Duration,
    ) -> Result<Value, MetlinkError> {
        debug!(url, ?query, "requesting");

        let response = self
            .http
            .get(url)
            .query(query)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| MetlinkError::network(&e))?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "response");

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(url, error = %e, "failed to read error body");
                    String::new()
                }
            };
            return Err(MetlinkError::UpstreamHttp {
                status: status.as_u16(),
                body: body.trim().chars().take(BODY_SNIPPET_CHARS).collect(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MetlinkError::network(&e))?;

        serde_json::from_str(&body).map_err(|e| MetlinkError::InvalidJson {
            message: e.to_string(),
        })
    }
}
