//! Appointment draft validation and payload assembly
//!
//! The draft mirrors the raw form fields as the UI submits them. A
//! draft is validated once into a [`ValidatedDraft`] and converted
//! deterministically into the [`AppointmentPayload`] sent to the
//! backend.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// The enumerated meeting lengths offered by the duration picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum DurationMinutes {
    Min15,
    Min30,
    Min45,
    Min60,
    Min90,
    Min120,
}

impl DurationMinutes {
    pub fn minutes(self) -> i64 {
        match self {
            DurationMinutes::Min15 => 15,
            DurationMinutes::Min30 => 30,
            DurationMinutes::Min45 => 45,
            DurationMinutes::Min60 => 60,
            DurationMinutes::Min90 => 90,
            DurationMinutes::Min120 => 120,
        }
    }
}

impl TryFrom<i64> for DurationMinutes {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            15 => Ok(DurationMinutes::Min15),
            30 => Ok(DurationMinutes::Min30),
            45 => Ok(DurationMinutes::Min45),
            60 => Ok(DurationMinutes::Min60),
            90 => Ok(DurationMinutes::Min90),
            120 => Ok(DurationMinutes::Min120),
            other => Err(format!("{} is not a supported duration", other)),
        }
    }
}

impl From<DurationMinutes> for i64 {
    fn from(value: DurationMinutes) -> Self {
        value.minutes()
    }
}

/// Raw form fields for creating or editing an appointment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub participants_raw: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// A draft that passed validation, with fields parsed into their
/// real types.
#[derive(Debug, Clone)]
pub struct ValidatedDraft {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: DurationMinutes,
    pub participants: Vec<String>,
    pub location: String,
    pub description: String,
}

/// Payload shape accepted by the backend appointments endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentPayload {
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub participants: Vec<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_meet_link: Option<String>,
}

/// Split a comma-separated participant string into trimmed,
/// non-empty entries, preserving input order. No address-format
/// validation happens here; malformed entries pass through to the
/// backend unchanged.
pub fn parse_participants(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

impl AppointmentDraft {
    /// Validate every field, collecting all failures rather than
    /// stopping at the first.
    pub fn validate(&self) -> Result<ValidatedDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        if title.len() < 2 {
            errors.push(FieldError::new(
                "title",
                "Title must be at least 2 characters",
            ));
        }

        let date = if self.date.trim().is_empty() {
            errors.push(FieldError::new("date", "Date is required"));
            None
        } else {
            match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
                Ok(d) => Some(d),
                Err(_) => {
                    errors.push(FieldError::new("date", "Date must be YYYY-MM-DD"));
                    None
                }
            }
        };

        let time = if self.time.trim().is_empty() {
            errors.push(FieldError::new("time", "Time is required"));
            None
        } else {
            // HTML time inputs submit HH:MM, with seconds optional
            match NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
                .or_else(|_| NaiveTime::parse_from_str(self.time.trim(), "%H:%M:%S"))
            {
                Ok(t) => Some(t),
                Err(_) => {
                    errors.push(FieldError::new("time", "Time must be HH:MM"));
                    None
                }
            }
        };

        let duration = match self.duration_minutes {
            Some(minutes) => match DurationMinutes::try_from(minutes) {
                Ok(d) => Some(d),
                Err(message) => {
                    errors.push(FieldError::new("duration_minutes", &message));
                    None
                }
            },
            None => {
                errors.push(FieldError::new("duration_minutes", "Duration is required"));
                None
            }
        };

        if self.participants_raw.trim().len() < 3 {
            errors.push(FieldError::new(
                "participants_raw",
                "At least one participant email is required",
            ));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidatedDraft {
            title: title.to_string(),
            date: date.unwrap(),
            time: time.unwrap(),
            duration: duration.unwrap(),
            participants: parse_participants(&self.participants_raw),
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

impl ValidatedDraft {
    /// Combine `date + time` into an instant and add the duration.
    ///
    /// The naive datetime is interpreted in this process's local
    /// timezone, the same way the browser form treated it. No
    /// timezone field travels with the payload, so viewers in other
    /// zones may see shifted times.
    pub fn start_time(&self) -> DateTime<Utc> {
        let naive = self.date.and_time(self.time);
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            // A nonexistent local time (DST gap) falls back to
            // treating the wall clock as UTC
            .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
    }

    /// Assemble the backend payload. `google_meet_link` is stamped
    /// whenever the location looks like a Meet URL, duplicating the
    /// location field; the backend tolerates the redundancy.
    pub fn to_payload(&self) -> AppointmentPayload {
        let start_time = self.start_time();
        let end_time = start_time + Duration::minutes(self.duration.minutes());

        let google_meet_link = if self.location.contains("meet.google.com") {
            Some(self.location.clone())
        } else {
            None
        };

        AppointmentPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            start_time,
            end_time,
            location: self.location.clone(),
            participants: self.participants.clone(),
            status: "scheduled".to_string(),
            user_id: None,
            google_meet_link,
        }
    }
}
