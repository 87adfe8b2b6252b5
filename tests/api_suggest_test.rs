//! Integration tests for the suggested times endpoint

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serial_test::serial;
    use tower::util::ServiceExt;

    use crate::test_utils::{body_json, json_request, test_app};

    /// Tests suggest endpoint returns 401 without a session token
    #[tokio::test]
    #[serial]
    async fn it_returns_401_without_a_session_token() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/suggest",
                None,
                serde_json::json!({ "date": "2024-06-10" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    /// Tests suggest endpoint returns 400 for a missing or invalid date
    #[tokio::test]
    #[serial]
    async fn it_returns_400_for_a_bad_date() {
        for body in [
            serde_json::json!({}),
            serde_json::json!({ "date": "June 10th" }),
        ] {
            let app = test_app();
            let response = app
                .oneshot(json_request("POST", "/api/suggest", Some("session-1"), body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    /// Tests suggest endpoint returns the canned placeholder times
    /// regardless of input
    #[tokio::test]
    #[serial]
    async fn it_returns_the_canned_times() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/suggest",
                Some("session-1"),
                serde_json::json!({
                    "date": "2024-06-10",
                    "duration_minutes": 60,
                    "participants_raw": "a@x.com, b@y.com"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body["suggestions"],
            serde_json::json!(["09:00", "10:30", "14:00", "15:30"])
        );
    }
}
