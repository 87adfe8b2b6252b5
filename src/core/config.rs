use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the backend REST API that owns persistence,
    /// conflicts, and auth. When unset, routes that proxy to it fail
    /// per-request instead of the server refusing to start.
    pub backend_api_url: Option<String>,
    /// Google OAuth client id handed to the UI for the popup flow.
    /// When unset, Meet-link creation degrades to the mock path.
    pub google_client_id: Option<String>,
    /// Google API base, overridable so tests can point at a mock server.
    pub google_api_url: String,
    /// Directory of built web UI assets served as the fallback route.
    pub static_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let backend_api_url = env::var("MEETNING_BACKEND_API_URL").ok();
        let google_client_id = env::var("MEETNING_GOOGLE_CLIENT_ID").ok();
        let google_api_url = env::var("MEETNING_GOOGLE_API_URL")
            .unwrap_or_else(|_| "https://www.googleapis.com".to_string());
        let static_dir =
            env::var("MEETNING_STATIC_DIR").unwrap_or_else(|_| "./web-ui/dist".to_string());

        Self {
            backend_api_url,
            google_client_id,
            google_api_url,
            static_dir,
        }
    }
}
