//! Public types for the suggested times API
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub date: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub participants_raw: String,
}

#[derive(Serialize, Deserialize)]
pub struct SuggestResponse {
    /// Suggested start times of day, `HH:MM`
    pub suggestions: Vec<String>,
}
