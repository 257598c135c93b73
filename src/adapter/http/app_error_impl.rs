use crate::adapter::http::schema::batch::BatchErrorResponse;
use crate::application::app_error::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

fn invalid_input(errors: serde_json::Value) -> Response {
    let body = Json(BatchErrorResponse {
        success: false,
        errors,
        message: "Invalid input".to_string(),
    });
    (StatusCode::BAD_REQUEST, body).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(errors) => {
                return invalid_input(serde_json::to_value(errors).unwrap_or_default());
            }
            AppError::InvalidBody(reason) => {
                return invalid_input(json!({ "__all__": [reason] }));
            }
            AppError::InvalidId(_) | AppError::ProfileNotFound => {
                (StatusCode::NOT_FOUND, Some("Profile not found".to_string()))
            }
            AppError::PageNotFound(_) => (StatusCode::NOT_FOUND, Some("Invalid page".to_string())),
            _ => {
                tracing::error!("Request failed: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let message = match message {
            Some(msg) => msg,
            None => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };

        let body = Json(ErrorResponse { error: message });

        (status, body).into_response()
    }
}
