//! Router for the appointments API
//!
//! Thin proxy over the backend appointments endpoints: drafts are
//! validated and assembled into payloads here, everything stateful
//! happens in the backend.

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
};
use axum_extra::extract::Query;
use http::HeaderMap;

use super::public;
use crate::api::state::AppState;
use crate::appointments::{AppointmentDraft, draft_from_stored, filter_appointments};
use crate::backend::BackendClient;
use crate::session::session_token;

type SharedState = Arc<RwLock<AppState>>;

/// Resolve the caller's session and a configured backend client, or
/// the error response to answer with instead.
fn backend_client(
    state: &SharedState,
    headers: &HeaderMap,
) -> Result<BackendClient, axum::response::Response> {
    let Some(session) = session_token(headers) else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": "Missing session token" })),
        )
            .into_response());
    };

    let backend_api_url = {
        let shared_state = state.read().expect("Unable to read shared state");
        shared_state.config.backend_api_url.clone()
    };

    BackendClient::new(backend_api_url.as_deref(), &session)
        .map_err(|err| crate::api::public::ApiError::from(err).into_response())
}

fn validation_failed(
    errors: Vec<crate::appointments::draft::FieldError>,
) -> axum::response::Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(public::ValidationErrorResponse { errors }),
    )
        .into_response()
}

async fn list_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(params): Query<public::ListQuery>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let client = match backend_client(&state, &headers) {
        Ok(client) => client,
        Err(response) => return Ok(response),
    };

    let appointments = client.list_appointments().await?;
    let query = params.q.unwrap_or_default();
    let filtered: Vec<public::AppointmentResponse> = filter_appointments(appointments, &query)
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(filtered).into_response())
}

async fn create_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(draft): Json<AppointmentDraft>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let client = match backend_client(&state, &headers) {
        Ok(client) => client,
        Err(response) => return Ok(response),
    };

    let validated = match draft.validate() {
        Ok(validated) => validated,
        Err(errors) => return Ok(validation_failed(errors)),
    };

    let payload = validated.to_payload();
    let created = client.create_appointment(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(public::AppointmentResponse::from(created)),
    )
        .into_response())
}

async fn update_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(draft): Json<AppointmentDraft>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let client = match backend_client(&state, &headers) {
        Ok(client) => client,
        Err(response) => return Ok(response),
    };

    let validated = match draft.validate() {
        Ok(validated) => validated,
        Err(errors) => return Ok(validation_failed(errors)),
    };

    let payload = validated.to_payload();
    let updated = client.update_appointment(&id, &payload).await?;

    Ok(Json(public::AppointmentResponse::from(updated)).into_response())
}

async fn delete_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let client = match backend_client(&state, &headers) {
        Ok(client) => client,
        Err(response) => return Ok(response),
    };

    // Only a backend 2xx counts as deleted; failures propagate so
    // the UI leaves its list unchanged
    client.delete_appointment(&id).await?;

    Ok(Json(public::DeleteResponse { deleted: true }).into_response())
}

/// Pre-filled form fields for the edit flow, reconciled from the
/// stored appointment shape.
async fn edit_draft_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let client = match backend_client(&state, &headers) {
        Ok(client) => client,
        Err(response) => return Ok(response),
    };

    let stored = client.get_appointment(&id).await?;
    let draft = draft_from_stored(&stored);

    Ok(Json(draft).into_response())
}

/// Create the appointments router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_handler).post(create_handler))
        .route(
            "/{id}",
            axum::routing::put(update_handler).delete(delete_handler),
        )
        .route("/{id}/draft", get(edit_draft_handler))
}
