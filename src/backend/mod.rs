//! Client for the external backend REST API
//!
//! The backend owns persistence, conflict detection, and auth; this
//! service only forwards requests, carrying the caller's session
//! token in the same header it arrived on. Responses come wrapped in
//! a `{ data, message?, success? }` envelope that is unwrapped here.

use anyhow::anyhow;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::appointments::AppointmentPayload;
use crate::appointments::edit::StoredAppointment;
use crate::session::SESSION_HEADER;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    message: Option<String>,
    success: Option<bool>,
}

pub struct BackendClient {
    base_url: String,
    session_token: String,
}

impl BackendClient {
    /// Build a client for the configured backend, or fail when no
    /// backend URL is configured so the route degrades per-request.
    pub fn new(base_url: Option<&str>, session_token: &str) -> Result<Self, anyhow::Error> {
        let base_url = base_url
            .ok_or_else(|| anyhow!("Backend API URL is not configured"))?
            .trim_end_matches('/')
            .to_string();
        Ok(Self {
            base_url,
            session_token: session_token.to_string(),
        })
    }

    fn unwrap_envelope<T>(status: reqwest::StatusCode, text: &str) -> Result<T, anyhow::Error>
    where
        T: DeserializeOwned,
    {
        let envelope: Envelope<T> = serde_json::from_str(text)
            .map_err(|_| anyhow!("Backend returned a non-JSON response ({})", status))?;

        if !status.is_success() || envelope.success == Some(false) {
            let message = envelope
                .message
                .unwrap_or_else(|| "unknown backend error".to_string());
            anyhow::bail!("Backend request failed: {} ({})", status, message);
        }

        envelope
            .data
            .ok_or_else(|| anyhow!("Backend response had no data"))
    }

    pub async fn list_appointments(&self) -> Result<Vec<StoredAppointment>, anyhow::Error> {
        let client = Client::new();
        let url = format!("{}/appointments", self.base_url);
        let res = client
            .get(&url)
            .header(SESSION_HEADER, &self.session_token)
            .send()
            .await?;
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        Self::unwrap_envelope(status, &text)
    }

    pub async fn get_appointment(&self, id: &str) -> Result<StoredAppointment, anyhow::Error> {
        let client = Client::new();
        let url = format!("{}/appointments/{}", self.base_url, id);
        let res = client
            .get(&url)
            .header(SESSION_HEADER, &self.session_token)
            .send()
            .await?;
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        Self::unwrap_envelope(status, &text)
    }

    pub async fn create_appointment(
        &self,
        payload: &AppointmentPayload,
    ) -> Result<StoredAppointment, anyhow::Error> {
        let client = Client::new();
        let url = format!("{}/appointments", self.base_url);
        let res = client
            .post(&url)
            .header(SESSION_HEADER, &self.session_token)
            .json(payload)
            .send()
            .await?;
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        Self::unwrap_envelope(status, &text)
    }

    pub async fn update_appointment(
        &self,
        id: &str,
        payload: &AppointmentPayload,
    ) -> Result<StoredAppointment, anyhow::Error> {
        let client = Client::new();
        let url = format!("{}/appointments/{}", self.base_url, id);
        let res = client
            .put(&url)
            .header(SESSION_HEADER, &self.session_token)
            .json(payload)
            .send()
            .await?;
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        Self::unwrap_envelope(status, &text)
    }

    /// Delete forwards the backend's verdict: only a 2xx (with no
    /// envelope failure) counts as deleted, so the UI removes the row
    /// only when the backend actually did.
    pub async fn delete_appointment(&self, id: &str) -> Result<(), anyhow::Error> {
        let client = Client::new();
        let url = format!("{}/appointments/{}", self.base_url, id);
        let res = client
            .delete(&url)
            .header(SESSION_HEADER, &self.session_token)
            .send()
            .await?;
        let status = res.status();
        let text = res.text().await.unwrap_or_default();

        if !status.is_success() {
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&text)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| "unknown backend error".to_string());
            anyhow::bail!("Backend delete failed: {} ({})", status, message);
        }
        Ok(())
    }
}
