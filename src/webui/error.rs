use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// A 500 with a caller-facing message; `details` is only set in debug mode.
    #[error("{message}")]
    Unavailable {
        message: String,
        details: Option<String>,
    },
}

impl ApiError {
    pub fn unavailable(message: &str, cause: &anyhow::Error, debug: bool) -> Self {
        error!(error = %format!("{cause:#}"), "{message}");
        ApiError::Unavailable {
            message: message.to_string(),
            details: debug.then(|| format!("{cause:#}")),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": msg }),
            ),
            ApiError::Unavailable { message, details } => {
                let mut body = serde_json::json!({ "error": message });
                if let Some(details) = details {
                    body["details"] = serde_json::Value::String(details);
                }
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let bad = ApiError::BadRequest("message is required".to_string()).into_response();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let cause = anyhow::anyhow!("missing file");
        let unavailable = ApiError::unavailable("Tool metadata is unavailable.", &cause, false);
        assert!(matches!(
            unavailable,
            ApiError::Unavailable { details: None, .. }
        ));
        assert_eq!(
            unavailable.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_debug_details_include_cause_chain() {
        let cause = anyhow::anyhow!("root").context("outer");
        let err = ApiError::unavailable("Tool metadata is unavailable.", &cause, true);
        match err {
            ApiError::Unavailable { message, details } => {
                assert_eq!(message, "Tool metadata is unavailable.");
                assert_eq!(details.as_deref(), Some("outer: root"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_response_bodies() {
        let bad = ApiError::BadRequest("message is required".to_string()).into_response();
        assert_eq!(
            body_json(bad).await,
            serde_json::json!({"error": "message is required"})
        );

        let cause = anyhow::anyhow!("missing file");
        let quiet = ApiError::unavailable("Tool metadata is unavailable.", &cause, false);
        assert_eq!(
            body_json(quiet.into_response()).await,
            serde_json::json!({"error": "Tool metadata is unavailable."})
        );

        let verbose = ApiError::unavailable("Tool metadata is unavailable.", &cause, true);
        assert_eq!(
            body_json(verbose.into_response()).await,
            serde_json::json!({"error": "Tool metadata is unavailable.", "details": "missing file"})
        );
    }
}
