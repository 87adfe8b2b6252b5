//! Integration tests for the meet link proxy endpoint

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serial_test::serial;
    use tower::util::ServiceExt;

    use crate::test_utils::{body_json, json_request, test_app, test_app_with};

    fn meet_body(access_token: Option<&str>) -> serde_json::Value {
        let mut body = serde_json::json!({
            "title": "Standup",
            "start_time": "2024-06-10T09:00:00Z",
            "end_time": "2024-06-10T09:30:00Z",
            "participants": ["a@x.com", "b@y.com"]
        });
        if let Some(token) = access_token {
            body["access_token"] = serde_json::json!(token);
        }
        body
    }

    fn assert_mock_link(value: &serde_json::Value) {
        let url = value["meetUrl"].as_str().unwrap();
        let token = url.strip_prefix("https://meet.google.com/").unwrap();
        assert_eq!(token.len(), 8);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
        assert_eq!(value["isMock"], serde_json::json!(true));
    }

    /// Tests meet endpoint returns 401 without a session token
    #[tokio::test]
    #[serial]
    async fn it_returns_401_without_a_session_token() {
        let app = test_app();

        let response = app
            .oneshot(json_request("POST", "/api/meet", None, meet_body(None)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    /// Tests meet endpoint returns 400 when required fields are missing
    #[tokio::test]
    #[serial]
    async fn it_returns_400_for_missing_fields() {
        for missing in ["title", "start_time", "end_time"] {
            let app = test_app();
            let mut body = meet_body(None);
            body.as_object_mut().unwrap().remove(missing);

            let response = app
                .oneshot(json_request("POST", "/api/meet", Some("session-1"), body))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    /// Tests meet endpoint returns a mock link when no access token exists
    #[tokio::test]
    #[serial]
    async fn it_returns_a_mock_link_without_an_access_token() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/meet",
                Some("session-1"),
                meet_body(None),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_mock_link(&body);
        assert!(body.get("error").is_none());
    }

    /// Tests meet endpoint returns the real link from the provider
    #[tokio::test]
    #[serial]
    async fn it_returns_the_real_link_on_provider_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/calendar/v3/calendars/primary/events")
            .match_query(mockito::Matcher::UrlEncoded(
                "conferenceDataVersion".into(),
                "1".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "id": "evt123",
                    "hangoutLink": "https://meet.google.com/abc-defg-hij"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let app = test_app_with(None, Some(server.url()), None);
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/meet",
                Some("session-1"),
                meet_body(Some("ya29.token")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["meetUrl"], "https://meet.google.com/abc-defg-hij");
        assert_eq!(body["isMock"], serde_json::json!(false));
        assert_eq!(body["eventId"], "evt123");
        mock.assert_async().await;
    }

    /// Tests meet endpoint falls back to a mock link when the provider
    /// response has no conferencing URL
    #[tokio::test]
    #[serial]
    async fn it_falls_back_to_mock_when_no_link_is_present() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/calendar/v3/calendars/primary/events")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "id": "evt123",
                    "conferenceData": { "entryPoints": [{ "entryPointType": "phone" }] }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let app = test_app_with(None, Some(server.url()), None);
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/meet",
                Some("session-1"),
                meet_body(Some("ya29.token")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_mock_link(&body);
        assert!(body["error"].as_str().unwrap().contains("conferencing URL"));
    }

    /// Tests meet endpoint treats an HTML provider response as a
    /// provider error and falls back to a mock link
    #[tokio::test]
    #[serial]
    async fn it_falls_back_to_mock_on_a_non_json_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/calendar/v3/calendars/primary/events")
            .match_query(mockito::Matcher::Any)
            .with_status(502)
            .with_header("content-type", "text/html")
            .with_body("<html>502 Bad Gateway</html>")
            .create_async()
            .await;

        let app = test_app_with(None, Some(server.url()), None);
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/meet",
                Some("session-1"),
                meet_body(Some("ya29.token")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_mock_link(&body);
        assert!(body["error"].as_str().unwrap().contains("non-JSON"));
    }

    /// Tests meet endpoint falls back to a mock link on a provider
    /// error status
    #[tokio::test]
    #[serial]
    async fn it_falls_back_to_mock_on_a_provider_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/calendar/v3/calendars/primary/events")
            .match_query(mockito::Matcher::Any)
            .with_status(403)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "error": { "message": "Insufficient permissions" }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let app = test_app_with(None, Some(server.url()), None);
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/meet",
                Some("session-1"),
                meet_body(Some("ya29.token")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_mock_link(&body);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("Insufficient permissions")
        );
    }

    /// Tests meet endpoint uses the session's cached token when the
    /// request carries none
    #[tokio::test]
    #[serial]
    async fn it_uses_the_cached_session_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/calendar/v3/calendars/primary/events")
            .match_query(mockito::Matcher::Any)
            .match_header("authorization", "Bearer ya29.cached")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "id": "evt123",
                    "hangoutLink": "https://meet.google.com/abc-defg-hij"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let app = test_app_with(None, Some(server.url()), None);

        // Hand the token over the way the completed popup flow does
        let save = json_request(
            "POST",
            "/api/auth/google",
            Some("session-1"),
            serde_json::json!({ "access_token": "ya29.cached", "expires_in": 3600 }),
        );
        let response = app.clone().oneshot(save).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/meet",
                Some("session-1"),
                meet_body(None),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["isMock"], serde_json::json!(false));
        mock.assert_async().await;
    }
}
