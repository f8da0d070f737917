//! Integration tests for the health endpoint

mod test_utils;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::test_utils::{FakeMail, body_to_string, test_app};

    /// Tests the health endpoint reports healthy with a parseable timestamp
    #[tokio::test]
    async fn it_returns_healthy() {
        let app = test_app(Arc::new(FakeMail::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response.into_body()).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "proton-api-service");

        let timestamp = json["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    /// Tests unknown paths fall through to a 404
    #[tokio::test]
    async fn it_returns_404_for_unknown_path() {
        let app = test_app(Arc::new(FakeMail::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
