//! In-memory search over a listed page of appointments
//!
//! The backend owns querying; this filter only narrows the page the
//! user is already looking at, the way the list view's search box
//! behaves.

use super::edit::StoredAppointment;
use super::participants::normalize_participants;

/// Case-insensitive substring match over title, description,
/// location, and participant emails. Preserves backend order. An
/// empty query matches everything.
pub fn filter_appointments(appointments: Vec<StoredAppointment>, query: &str) -> Vec<StoredAppointment> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return appointments;
    }

    appointments
        .into_iter()
        .filter(|appointment| matches_query(appointment, &query))
        .collect()
}

fn matches_query(appointment: &StoredAppointment, query: &str) -> bool {
    if appointment.title.to_lowercase().contains(query) {
        return true;
    }
    if let Some(description) = &appointment.description
        && description.to_lowercase().contains(query)
    {
        return true;
    }
    if let Some(location) = &appointment.location
        && location.to_lowercase().contains(query)
    {
        return true;
    }
    if let Some(participants) = appointment.participants.as_deref() {
        return normalize_participants(participants)
            .iter()
            .any(|p| p.email.to_lowercase().contains(query));
    }
    false
}
