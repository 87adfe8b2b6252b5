//! Router for the assistant chat widget
//!
//! Canned keyword-matched replies, not a real assistant. Kept behind
//! the same request/response shape a backed assistant would use.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
};
use http::HeaderMap;

use super::public;
use crate::api::state::AppState;
use crate::session::session_token;

type SharedState = Arc<RwLock<AppState>>;

/// Simulates assistant thinking time so the widget's typing
/// indicator is visible.
const REPLY_DELAY_MS: u64 = 300;

fn canned_reply(message: &str) -> String {
    let message = message.to_lowercase();

    // "meeting" contains "meet", so scheduling keywords are checked first
    if message.contains("schedule")
        || message.contains("appointment")
        || message.contains("meeting")
    {
        "You can create an appointment from the calendar view. Pick a date, \
         time, and duration, then add participant emails separated by commas."
            .to_string()
    } else if message.contains("meet") || message.contains("video") {
        "To add a Google Meet link, connect your Google account from the \
         appointment form and a link will be generated when you save."
            .to_string()
    } else if message.contains("delete") || message.contains("cancel") {
        "Open the appointment from the list or calendar and use the delete \
         button. Participants are not notified automatically."
            .to_string()
    } else {
        "I can help with scheduling appointments, Google Meet links, and \
         managing your calendar. What would you like to do?"
            .to_string()
    }
}

async fn chat_handler(
    headers: HeaderMap,
    Json(payload): Json<public::ChatRequest>,
) -> impl IntoResponse {
    if session_token(&headers).is_none() {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": "Missing session token" })),
        )
            .into_response();
    }

    tokio::time::sleep(Duration::from_millis(REPLY_DELAY_MS)).await;

    Json(public::ChatResponse {
        reply: canned_reply(&payload.message),
    })
    .into_response()
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}
