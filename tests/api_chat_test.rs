//! Integration tests for the assistant chat endpoint

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serial_test::serial;
    use tower::util::ServiceExt;

    use crate::test_utils::{body_json, json_request, test_app};

    /// Tests chat endpoint returns 401 without a session token
    #[tokio::test]
    #[serial]
    async fn it_returns_401_without_a_session_token() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/chat",
                None,
                serde_json::json!({ "message": "hello" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    /// Tests chat endpoint answers scheduling questions with the
    /// canned reply
    #[tokio::test]
    #[serial]
    async fn it_replies_to_a_scheduling_question() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/chat",
                Some("session-1"),
                serde_json::json!({ "message": "How do I schedule a meeting?" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["reply"].as_str().unwrap().contains("appointment"));
    }
}
