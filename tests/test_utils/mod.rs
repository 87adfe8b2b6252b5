//! Test utilities for integration tests
use std::sync::{Arc, RwLock};
use std::time::Duration;

use axum::{Router, body::Body};
use http::Request;

use meetning::api::AppState;
use meetning::api::app;
use meetning::core::AppConfig;
use meetning::session::SESSION_HEADER;
use meetning::suggest::CannedSuggestions;

/// Creates a test application router with no backend or Google
/// provider configured, so proxy routes exercise their degraded
/// paths.
#[allow(dead_code)]
pub fn test_app() -> Router {
    test_app_with(None, None, None)
}

/// Creates a test application router pointing at mock servers for
/// the backend API and the Google Calendar API.
#[allow(dead_code)]
pub fn test_app_with(
    backend_api_url: Option<String>,
    google_api_url: Option<String>,
    google_client_id: Option<String>,
) -> Router {
    let config = AppConfig {
        backend_api_url,
        google_client_id,
        google_api_url: google_api_url.unwrap_or_else(|| "http://127.0.0.1:9".to_string()),
        static_dir: "./web-ui/dist".to_string(),
    };

    // Zero delay keeps the suggested-times stub instant in tests
    let app_state = AppState::new(config)
        .with_suggester(Arc::new(CannedSuggestions::new(Duration::ZERO)));
    app(Arc::new(RwLock::new(app_state)))
}

/// Build a JSON request, optionally carrying a session token.
#[allow(dead_code)]
pub fn json_request(
    method: &str,
    uri: &str,
    session: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(session) = session {
        builder = builder.header(SESSION_HEADER, session);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Build a bodyless request, optionally carrying a session token.
#[allow(dead_code)]
pub fn request(method: &str, uri: &str, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(session) = session {
        builder = builder.header(SESSION_HEADER, session);
    }
    builder.body(Body::empty()).unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
