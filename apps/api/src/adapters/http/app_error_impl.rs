use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use waitlist_types::ApiResponse;

const UNKNOWN_ERROR: &str = "An unknown error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                tracing::warn!(%errors, "Rejected invalid submission");
                error_resp(
                    StatusCode::BAD_REQUEST,
                    ApiResponse::failure("Validation failed").with_errors(errors),
                )
            }
            err @ (AppError::DuplicateEntry | AppError::UsernameTaken) => {
                tracing::warn!(error = %err, "Rejected duplicate");
                error_resp(StatusCode::CONFLICT, ApiResponse::failure(err.to_string()))
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                let message = if msg.is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    msg
                };
                error_resp(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::failure(message),
                )
            }
        }
    }
}

fn error_resp(status: StatusCode, body: ApiResponse<()>) -> Response {
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_field_errors() {
        let (status, body) = render(AppError::Validation("email: Required".into())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "success": false, "message": "Validation failed", "errors": "email: Required" })
        );
    }

    #[tokio::test]
    async fn duplicate_maps_to_409_with_recognizable_message() {
        let (status, body) = render(AppError::DuplicateEntry).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body,
            json!({ "success": false, "message": "Email already registered in waitlist" })
        );
    }

    #[tokio::test]
    async fn internal_without_message_uses_fallback() {
        let (status, body) = render(AppError::Internal(String::new())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], UNKNOWN_ERROR);
    }
}
