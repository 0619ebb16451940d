//! JSON request body extractor.

use axum::extract::FromRequest;

use crate::Error;

/// Extracts a JSON request body like [axum::Json], but rejects bad requests
/// with an [Error] so that the response body is JSON too.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

#[cfg(test)]
mod json_body_tests {
    use axum::{Router, http::StatusCode, routing::post};
    use axum_test::TestServer;
    use serde::Deserialize;
    use serde_json::json;

    use super::JsonBody;

    #[derive(Deserialize)]
    struct Greeting {
        name: String,
    }

    fn get_test_server() -> TestServer {
        let app = Router::new().route(
            "/greet",
            post(|JsonBody(greeting): JsonBody<Greeting>| async move { greeting.name }),
        );

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn extracts_json_body() {
        let server = get_test_server();

        let response = server.post("/greet").json(&json!({ "name": "Ada" })).await;

        response.assert_status_ok();
        response.assert_text("Ada");
    }

    #[tokio::test]
    async fn malformed_json_is_a_json_bad_request() {
        let server = get_test_server();

        let response = server
            .post("/greet")
            .text("{\"name\":")
            .content_type("application/json")
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.header("content-type"), "application/json");
        let body: serde_json::Value = response.json();
        assert!(body["message"].is_string(), "got body {body}");
    }

    #[tokio::test]
    async fn body_of_the_wrong_shape_is_a_json_bad_request() {
        let server = get_test_server();

        let response = server.post("/greet").json(&json!({ "name": 42 })).await;

        response.assert_status_bad_request();
        let body: serde_json::Value = response.json();
        assert!(body["message"].is_string(), "got body {body}");
    }

    #[tokio::test]
    async fn missing_content_type_is_unsupported() {
        let server = get_test_server();

        let response = server.post("/greet").await;

        response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let body: serde_json::Value = response.json();
        let message = body["message"].as_str().unwrap_or_default();
        assert!(
            message.contains("application/json"),
            "got message {message}"
        );
    }
}
