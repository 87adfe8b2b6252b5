//! Google Calendar client for creating events with Meet conferencing

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

/// Event structures from the Calendar API documentation, limited to
/// the fields the conferencing flow reads back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResource {
    pub id: Option<String>,
    pub hangout_link: Option<String>,
    pub conference_data: Option<ConferenceData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceData {
    pub entry_points: Option<Vec<EntryPoint>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPoint {
    pub entry_point_type: Option<String>,
    pub uri: Option<String>,
}

/// A created event with its conferencing URL.
#[derive(Debug, Clone)]
pub struct CreatedEvent {
    pub meet_url: String,
    pub event_id: Option<String>,
}

/// Pull the conferencing URL out of a created event: the direct
/// hangout link when present, otherwise the first entry point
/// carrying a URI.
pub fn extract_meet_url(event: &EventResource) -> Option<String> {
    if let Some(link) = &event.hangout_link {
        return Some(link.clone());
    }
    event
        .conference_data
        .as_ref()
        .and_then(|data| data.entry_points.as_ref())
        .and_then(|points| points.iter().find_map(|p| p.uri.clone()))
}

/// Create an event in the user's primary calendar with a Meet
/// conference attached and return its conferencing URL.
///
/// Not idempotent: retrying after a timeout may create duplicate
/// events, as no dedup key is sent.
pub async fn insert_event(
    base_url: &str,
    access_token: &str,
    title: &str,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    participants: &[String],
) -> Result<CreatedEvent, anyhow::Error> {
    let client = Client::new();
    let url = format!(
        "{}/calendar/v3/calendars/primary/events?conferenceDataVersion=1",
        base_url
    );

    let attendees: Vec<_> = participants
        .iter()
        .map(|email| json!({ "email": email }))
        .collect();

    let body = json!({
        "summary": title,
        "start": { "dateTime": start_time.to_rfc3339(), "timeZone": "UTC" },
        "end": { "dateTime": end_time.to_rfc3339(), "timeZone": "UTC" },
        "attendees": attendees,
        "conferenceData": {
            "createRequest": {
                "requestId": Uuid::new_v4().to_string(),
                "conferenceSolutionKey": { "type": "hangoutsMeet" }
            }
        }
    });

    let res = client
        .post(&url)
        .bearer_auth(access_token)
        .json(&body)
        .send()
        .await?;
    let status = res.status();
    let text = res.text().await.unwrap_or_default();

    // The API answers JSON; an HTML body means a gateway or auth
    // error page and is treated as a provider failure
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|_| anyhow!("Event create returned a non-JSON response ({})", status))?;

    if !status.is_success() {
        let reason = value
            .pointer("/error/message")
            .and_then(|m| m.as_str())
            .unwrap_or("unknown error");
        anyhow::bail!("Event create failed: {} ({})", status, reason);
    }

    let event: EventResource = serde_json::from_value(value)?;
    let meet_url = extract_meet_url(&event)
        .ok_or_else(|| anyhow!("Event create response had no conferencing URL"))?;

    Ok(CreatedEvent {
        meet_url,
        event_id: event.id,
    })
}
