//! Session-scoped cache for Google OAuth access tokens
//!
//! Replaces the browser-local storage the web UI used for tokens with
//! a single typed store. Expiry checks live here and nowhere else.
//! There is no refresh flow: an expired token is treated as absent,
//! which forces a new interactive login in the UI.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use http::HeaderMap;
use serde::{Deserialize, Serialize};

/// Request header carrying the caller's session bearer token.
pub const SESSION_HEADER: &str = "x-session-token";

/// Extract the session token from request headers, if present.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Token shape as handed over by the completed OAuth popup flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleAuthToken {
    pub access_token: String,
    pub expires_in: Option<i64>,
}

/// Google tokens without an explicit lifetime last an hour.
const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;

/// Tokens within this margin of expiry are treated as expired so an
/// in-flight provider call doesn't race the deadline.
const EXPIRY_MARGIN_SECS: i64 = 30;

#[derive(Debug, Clone)]
pub struct CachedToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn from_auth(token: GoogleAuthToken) -> Self {
        let expires_in = token.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS);
        Self {
            access_token: token.access_token,
            expires_at: Utc::now() + Duration::seconds(expires_in - EXPIRY_MARGIN_SECS),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// In-memory token store keyed by session token.
#[derive(Debug, Default)]
pub struct TokenCache {
    tokens: HashMap<String, CachedToken>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, session: &str, token: GoogleAuthToken) {
        self.tokens
            .insert(session.to_string(), CachedToken::from_auth(token));
    }

    /// Look up a usable token for the session. Expired entries are
    /// reported as absent rather than returned.
    pub fn load(&self, session: &str) -> Option<&CachedToken> {
        self.tokens.get(session).filter(|t| !t.is_expired())
    }

    pub fn clear(&mut self, session: &str) {
        self.tokens.remove(session);
    }
}
