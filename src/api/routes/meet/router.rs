//! Router for the meet link API
//!
//! Proxies Google Calendar event creation so the browser never talks
//! to Google directly. Without a usable access token, or whenever the
//! provider call fails, the route degrades to a synthetic placeholder
//! link instead of blocking appointment creation.

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
};
use chrono::{DateTime, Utc};
use http::HeaderMap;
use uuid::Uuid;

use super::public;
use crate::api::state::AppState;
use crate::google::gcal;
use crate::session::session_token;

type SharedState = Arc<RwLock<AppState>>;

/// Synthesize a placeholder link in the same shape as a real Meet
/// URL: `https://meet.google.com/<8 lowercase hex chars>`.
fn mock_meet_link() -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("https://meet.google.com/{}", &token[..8])
}

fn mock_response(error: Option<String>) -> public::MeetLinkResponse {
    public::MeetLinkResponse {
        meet_url: mock_meet_link(),
        is_mock: true,
        event_id: None,
        error,
    }
}

fn bad_request(message: &str) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

async fn create_meet_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<public::MeetLinkRequest>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let Some(session) = session_token(&headers) else {
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": "Missing session token" })),
        )
            .into_response());
    };

    let Some(title) = payload.title.filter(|t| !t.trim().is_empty()) else {
        return Ok(bad_request("title is required"));
    };
    let Some(start_raw) = payload.start_time.filter(|t| !t.trim().is_empty()) else {
        return Ok(bad_request("start_time is required"));
    };
    let Some(end_raw) = payload.end_time.filter(|t| !t.trim().is_empty()) else {
        return Ok(bad_request("end_time is required"));
    };

    let Ok(start_time) = start_raw.parse::<DateTime<Utc>>() else {
        return Ok(bad_request("start_time must be an RFC 3339 timestamp"));
    };
    let Ok(end_time) = end_raw.parse::<DateTime<Utc>>() else {
        return Ok(bad_request("end_time must be an RFC 3339 timestamp"));
    };

    // The request's token wins; otherwise fall back to the token the
    // OAuth popup flow cached for this session
    let (access_token, google_api_url) = {
        let shared_state = state.read().expect("Unable to read shared state");
        let cached = shared_state
            .tokens
            .load(&session)
            .map(|t| t.access_token.clone());
        let access_token = payload
            .access_token
            .filter(|t| !t.trim().is_empty())
            .or(cached);
        (access_token, shared_state.config.google_api_url.clone())
    };

    // Degraded mode: no OAuth token means no provider call at all
    let Some(access_token) = access_token else {
        return Ok(Json(mock_response(None)).into_response());
    };

    let result = gcal::insert_event(
        &google_api_url,
        &access_token,
        &title,
        start_time,
        end_time,
        &payload.participants,
    )
    .await;

    let response = match result {
        Ok(event) => public::MeetLinkResponse {
            meet_url: event.meet_url,
            is_mock: false,
            event_id: event.event_id,
            error: None,
        },
        // Provider failures downgrade to a mock link; the appointment
        // flow must not be blocked by a conferencing error
        Err(err) => {
            tracing::warn!("Falling back to mock Meet link: {}", err);
            mock_response(Some(err.to_string()))
        }
    };

    Ok(Json(response).into_response())
}

/// Create the meet link router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(create_meet_handler))
}
