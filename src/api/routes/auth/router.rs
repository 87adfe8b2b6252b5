//! Router for the auth API
//!
//! The OAuth popup flow completes in the browser; these routes hold
//! the resulting access token for the session so later Meet link
//! requests can use it without repeating the popup.

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
};
use http::HeaderMap;

use super::public;
use crate::api::state::AppState;
use crate::session::session_token;

type SharedState = Arc<RwLock<AppState>>;

fn unauthorized() -> axum::response::Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "error": "Missing session token" })),
    )
        .into_response()
}

async fn save_token_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(token): Json<public::GoogleAuthToken>,
) -> impl IntoResponse {
    let Some(session) = session_token(&headers) else {
        return unauthorized();
    };

    state
        .write()
        .expect("Unable to write shared state")
        .tokens
        .save(&session, token);

    Json(serde_json::json!({ "saved": true })).into_response()
}

async fn status_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let Some(session) = session_token(&headers) else {
        return unauthorized();
    };

    let shared_state = state.read().expect("Unable to read shared state");
    let response = match shared_state.tokens.load(&session) {
        Some(token) => public::GoogleStatusResponse {
            connected: true,
            expires_at: Some(token.expires_at),
        },
        None => public::GoogleStatusResponse {
            connected: false,
            expires_at: None,
        },
    };

    Json(response).into_response()
}

async fn clear_token_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let Some(session) = session_token(&headers) else {
        return unauthorized();
    };

    state
        .write()
        .expect("Unable to write shared state")
        .tokens
        .clear(&session);

    Json(serde_json::json!({ "cleared": true })).into_response()
}

/// The OAuth client id the UI needs to start the popup flow. Not a
/// secret; served unauthenticated.
async fn client_id_handler(State(state): State<SharedState>) -> impl IntoResponse {
    let client_id = {
        let shared_state = state.read().expect("Unable to read shared state");
        shared_state.config.google_client_id.clone()
    };

    match client_id {
        Some(client_id) => Json(public::ClientIdResponse { client_id }).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Google OAuth is not configured" })),
        )
            .into_response(),
    }
}

/// Create the auth router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/google",
            get(status_handler)
                .post(save_token_handler)
                .delete(clear_token_handler),
        )
        .route("/google/client-id", get(client_id_handler))
}
