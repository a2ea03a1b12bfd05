//! HTTP route handlers.

use askama::Template;
use axum::{
    Router,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::MISSING_KEY_HELP;
use crate::metlink::normalize_predictions;
use crate::sign::render_sign;

use super::state::AppState;
use super::templates::SignPageTemplate;

/// Create the application router.
///
/// Every response, errors included, is marked `Cache-Control: no-store`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(sign_page))
        .route("/sign.txt", get(sign_text))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found\n")
}

/// Plain-text sign.
async fn sign_text(State(state): State<AppState>) -> Result<String, AppError> {
    let sign = current_sign(&state).await?;
    Ok(format!("{sign}\n"))
}

/// HTML sign page.
async fn sign_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let sign = current_sign(&state).await?;
    let page = SignPageTemplate {
        sign,
        refresh_secs: state.sign.refresh_secs,
    };
    let html = page.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {e}"),
    })?;
    Ok(Html(html))
}

/// Fetch, normalize and render the configured stop, unstyled.
async fn current_sign(state: &AppState) -> Result<String, AppError> {
    let client = state.metlink.as_ref().ok_or(AppError::MissingCredential)?;
    let settings = &state.sign;

    let payload = client
        .fetch_predictions(&settings.stop_id, settings.limit)
        .await
        .map_err(|e| AppError::Upstream {
            message: e.to_string(),
        })?;

    let predictions = normalize_predictions(&payload).map_err(|e| AppError::Upstream {
        message: e.to_string(),
    })?;

    Ok(render_sign(
        &predictions.stop_label,
        &settings.stop_id,
        &predictions.departures,
        settings.limit,
        false,
    ))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// No API key configured
    MissingCredential,
    /// Fetching or interpreting predictions failed
    Upstream { message: String },
    /// Rendering the page failed
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MissingCredential => {
                warn!("sign requested without METLINK_API_KEY");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MISSING_KEY_HELP.to_string(),
                )
            }
            AppError::Upstream { message } => {
                warn!(%message, "upstream failure");
                (StatusCode::BAD_GATEWAY, format!("Error: {message}\n"))
            }
            AppError::Internal { message } => {
                warn!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {message}\n"))
            }
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::Json;
    use axum::routing::get;
    use chrono::{Duration, Local};
    use serde_json::{Value, json};

    use super::*;
    use crate::metlink::{MetlinkClient, MetlinkConfig};
    use crate::test_support::{serve, unused_base_url};
    use crate::web::SignSettings;

    fn settings() -> SignSettings {
        SignSettings {
            stop_id: "7958".to_string(),
            limit: 2,
            refresh_secs: 20,
        }
    }

    /// Fake Metlink API serving `payload` for stop predictions.
    async fn fake_metlink(payload: Value) -> MetlinkClient {
        let app = Router::new().route(
            "/stop-predictions",
            get(move || {
                let payload = payload.clone();
                async move { Json(payload) }
            }),
        );
        let base = serve(app).await;
        MetlinkClient::new(MetlinkConfig::new("k").with_base_url(base)).unwrap()
    }

    async fn sign_server(metlink: Option<MetlinkClient>) -> String {
        serve(create_router(AppState::new(metlink, settings()))).await
    }

    fn departures_payload() -> Value {
        let soon = (Local::now() + Duration::minutes(5) + Duration::seconds(30))
            .fixed_offset()
            .to_rfc3339();
        json!({
            "departures": [
                {
                    "name": "MelroseRd (41)",
                    "service_id": "21",
                    "trip_headsign": "Courtenay Place",
                    "departure": { "expected": soon },
                },
                {
                    "service_id": "2",
                    "destination": { "name": "Karori" },
                    "departure": {},
                },
                {
                    "service_id": "3",
                    "trip_headsign": "Lyall Bay",
                    "departure": {},
                },
            ]
        })
    }

    #[tokio::test]
    async fn sign_text_renders_rows() {
        let base = sign_server(Some(fake_metlink(departures_payload()).await)).await;

        let response = reqwest::get(format!("{base}/sign.txt")).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["cache-control"], "no-store");
        assert!(
            response.headers()["content-type"]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );

        let body = response.text().await.unwrap();
        let lines: Vec<_> = body.lines().collect();
        assert_eq!(lines.len(), 3, "{body}");
        assert_eq!(lines[0], "21   Courtenay Place            5min");
        assert_eq!(lines[1], "2    Karori                       --");
        assert!(lines[2].starts_with("Time "));
        assert!(body.ends_with('\n'));
        assert!(!body.contains('\x1b'));
    }

    #[tokio::test]
    async fn sign_page_wraps_text() {
        let base = sign_server(Some(fake_metlink(json!({ "departures": [] })).await)).await;

        let response = reqwest::get(format!("{base}/")).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["cache-control"], "no-store");

        let body = response.text().await.unwrap();
        assert!(body.contains(r#"content="20""#));
        assert!(body.contains("<pre>--\nTime "));
    }

    #[tokio::test]
    async fn query_string_is_ignored() {
        let base = sign_server(Some(fake_metlink(json!({ "departures": [] })).await)).await;

        let response = reqwest::get(format!("{base}/sign.txt?x=1")).await.unwrap();
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let base = sign_server(None).await;

        let response = reqwest::get(format!("{base}/nope")).await.unwrap();
        assert_eq!(response.status(), 404);
        assert_eq!(response.headers()["cache-control"], "no-store");
        assert_eq!(response.text().await.unwrap(), "Not found\n");
    }

    #[tokio::test]
    async fn missing_key_is_server_error() {
        let base = sign_server(None).await;

        let response = reqwest::get(format!("{base}/sign.txt")).await.unwrap();
        assert_eq!(response.status(), 500);
        assert!(response.text().await.unwrap().starts_with("Missing METLINK_API_KEY."));
    }

    #[tokio::test]
    async fn upstream_error_is_bad_gateway() {
        let base =
            sign_server(Some(fake_metlink(json!({ "error": "Invalid stop_id" })).await)).await;

        let response = reqwest::get(format!("{base}/")).await.unwrap();
        assert_eq!(response.status(), 502);
        assert_eq!(response.text().await.unwrap(), "Error: Invalid stop_id\n");
    }

    #[tokio::test]
    async fn network_error_is_bad_gateway() {
        let client =
            MetlinkClient::new(MetlinkConfig::new("k").with_base_url(unused_base_url().await))
                .unwrap();
        let base = sign_server(Some(client)).await;

        let response = reqwest::get(format!("{base}/sign.txt")).await.unwrap();
        assert_eq!(response.status(), 502);
        assert!(response.text().await.unwrap().starts_with("Error: network error"));
    }

    #[tokio::test]
    async fn health_is_ok() {
        let base = sign_server(None).await;
        let body = reqwest::get(format!("{base}/health"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }
}
