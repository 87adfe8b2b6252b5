//! Public types for the auth API
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::session::GoogleAuthToken;

#[derive(Serialize, Deserialize)]
pub struct GoogleStatusResponse {
    /// Whether an unexpired Google token is cached for this session
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize)]
pub struct ClientIdResponse {
    pub client_id: String,
}
