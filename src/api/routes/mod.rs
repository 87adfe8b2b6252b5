//! API routes module

pub mod appointments;
pub mod auth;
pub mod chat;
pub mod meet;
pub mod suggest;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Appointment CRUD proxy and list search
        .nest("/appointments", appointments::router())
        // Google token cache
        .nest("/auth", auth::router())
        // Assistant widget
        .nest("/chat", chat::router())
        // Meet link creation proxy
        .nest("/meet", meet::router())
        // Suggested meeting times
        .nest("/suggest", suggest::router())
}
