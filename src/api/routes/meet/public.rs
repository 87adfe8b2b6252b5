//! Public types for the meet link API
use serde::{Deserialize, Serialize};

/// Request body for creating a Meet link. Required fields are
/// optional here so their absence can be answered with a 400 instead
/// of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct MeetLinkRequest {
    pub title: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub access_token: Option<String>,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MeetLinkResponse {
    #[serde(rename = "meetUrl")]
    pub meet_url: String,
    /// True whenever the real provider call could not be completed.
    /// Mock and real links are structurally identical; this flag is
    /// the only way to tell them apart.
    #[serde(rename = "isMock")]
    pub is_mock: bool,
    #[serde(rename = "eventId", skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
