//! Edit-flow reconciliation
//!
//! Rebuilds the form field state for an existing appointment from the
//! persisted `start_time`/`end_time`/`participants` shape so the edit
//! form opens pre-filled.

use chrono::{DateTime, Local, Utc};
use serde::Deserialize;

use super::draft::{AppointmentDraft, DurationMinutes};
use super::participants::{StoredParticipant, normalize_participants};

/// Appointment record as returned by the backend. Outbound responses
/// use the normalized shape instead; see the appointments route.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredAppointment {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub participants: Option<Vec<StoredParticipant>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub google_meet_link: Option<String>,
}

const DEFAULT_DURATION_MINUTES: i64 = 30;

/// Recompute the duration picker value from the stored interval,
/// defaulting to 30 minutes when the interval is missing, negative,
/// or not one of the offered lengths.
fn duration_from_interval(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> i64 {
    let (Some(start), Some(end)) = (start, end) else {
        return DEFAULT_DURATION_MINUTES;
    };

    let minutes = ((end - start).num_milliseconds() as f64 / 60_000.0).round() as i64;
    match DurationMinutes::try_from(minutes) {
        Ok(duration) => duration.minutes(),
        Err(_) => DEFAULT_DURATION_MINUTES,
    }
}

/// Reconstruct editable form fields from a stored appointment.
pub fn draft_from_stored(stored: &StoredAppointment) -> AppointmentDraft {
    let (date, time) = match stored.start_time {
        Some(start) => {
            let local = start.with_timezone(&Local);
            (
                local.format("%Y-%m-%d").to_string(),
                local.format("%H:%M").to_string(),
            )
        }
        None => (String::new(), String::new()),
    };

    let participants_raw = stored
        .participants
        .as_deref()
        .map(|p| {
            normalize_participants(p)
                .into_iter()
                .map(|p| p.email)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    AppointmentDraft {
        title: stored.title.clone(),
        date,
        time,
        duration_minutes: Some(duration_from_interval(stored.start_time, stored.end_time)),
        participants_raw,
        location: stored.location.clone().unwrap_or_default(),
        description: stored.description.clone().unwrap_or_default(),
    }
}
