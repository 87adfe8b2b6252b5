//! Router for the suggested times API

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
};
use chrono::NaiveDate;
use http::HeaderMap;

use super::public;
use crate::api::state::AppState;
use crate::appointments::draft::parse_participants;
use crate::session::session_token;

type SharedState = Arc<RwLock<AppState>>;

const DEFAULT_DURATION_MINUTES: i64 = 30;

async fn suggest_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<public::SuggestRequest>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    if session_token(&headers).is_none() {
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": "Missing session token" })),
        )
            .into_response());
    }

    let Some(date) = payload
        .date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok())
    else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "date must be YYYY-MM-DD" })),
        )
            .into_response());
    };

    let duration_minutes = payload.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES);
    let participants = parse_participants(&payload.participants_raw);

    // Clone the provider handle out of the lock before awaiting
    let suggester = {
        let shared_state = state.read().expect("Unable to read shared state");
        Arc::clone(&shared_state.suggester)
    };
    let suggestions = suggester
        .suggest(date, duration_minutes, &participants)
        .await?;

    Ok(Json(public::SuggestResponse { suggestions }).into_response())
}

/// Create the suggested times router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(suggest_handler))
}
