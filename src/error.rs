use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Shared(#[from] menuplan_shared::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Shared(menuplan_shared::Error::Validate(errors)) => {
                tracing::warn!(errors = %errors, "validation failed");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({
                        "error": "ValidationFailed",
                        "message": "Invalid recipe provided.",
                        "details": errors,
                    }),
                )
            }
            AppError::Shared(menuplan_shared::Error::NotFound(what)) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "NotFound",
                    "message": format!("{what} not found"),
                }),
            ),
            AppError::Shared(e) => {
                tracing::error!("Server error: {:?}", e);
                internal_error()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                internal_error()
            }
        };

        (status, Json(body)).into_response()
    }
}

fn internal_error() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "error": "InternalServerError",
            "message": "An unexpected error occurred. Please try again later.",
        }),
    )
}
