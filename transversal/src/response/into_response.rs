//! Axum integration
//!
//! Lets handlers return a [`Response<T>`] directly: the HTTP status line comes
//! from the response status and the body is the JSON form of the response.

use super::Response;
use axum::Json;
use axum::response::IntoResponse;
use http::StatusCode;
use serde::Serialize;

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        // An unset status renders as 200, matching the default
        let status = self.status.unwrap_or(StatusCode::OK);

        if status.is_server_error() {
            tracing::error!(
                status = status.as_u16(),
                message = %self.message,
                errors = ?self.errors,
                "Server error response"
            );
        }

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    async fn render<T: Serialize>(response: Response<T>) -> (StatusCode, Value) {
        let response = response.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_ok_renders_200_with_body() {
        let (status, body) = render(Response::ok_with_total("Found", vec!["a"], 3)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "status": 200,
                "message": "Found",
                "data": ["a"],
                "total": 3,
                "errors": []
            })
        );
    }

    #[tokio::test]
    async fn test_error_status_is_used() {
        let (status, body) = render(Response::<Option<i32>>::unauthorized(["token expired"])).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Error");
        assert_eq!(body["data"], Value::Null);
        assert_eq!(body["errors"], json!(["token expired"]));
    }

    #[tokio::test]
    async fn test_unset_status_renders_200() {
        let mut response = Response::ok("m", 1);
        response.set_status(None);

        let (status, body) = render(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], Value::Null);
    }

    #[tokio::test]
    async fn test_server_error() {
        let (status, _) = render(Response::<()>::internal_server_error(["db down"])).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
