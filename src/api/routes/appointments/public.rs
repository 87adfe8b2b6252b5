//! Public types for the appointments API
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::appointments::draft::FieldError;
use crate::appointments::edit::StoredAppointment;
use crate::appointments::{Participant, normalize_participants};

#[derive(Deserialize)]
pub struct ListQuery {
    /// Search text applied in memory to the listed page
    pub q: Option<String>,
}

/// Appointment shape served to the UI. Participants are always the
/// canonical normalized list, whatever shape the backend stored.
#[derive(Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_meet_link: Option<String>,
}

impl From<StoredAppointment> for AppointmentResponse {
    fn from(stored: StoredAppointment) -> Self {
        let participants = stored
            .participants
            .as_deref()
            .map(normalize_participants)
            .unwrap_or_default();

        Self {
            id: stored.id,
            title: stored.title,
            description: stored.description,
            location: stored.location,
            start_time: stored.start_time,
            end_time: stored.end_time,
            participants,
            status: stored.status,
            google_meet_link: stored.google_meet_link,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

#[derive(Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}
