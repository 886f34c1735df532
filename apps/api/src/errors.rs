use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned when the request body lacks an `optimized_resume` object.
pub const SHAPE_ERROR_MESSAGE: &str = "Invalid JSON structure. Expected \"optimized_resume\" object.";

/// Failures raised while turning a resume record into a PDF.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Root record absent or not an object. Always raised before any output exists.
    #[error("{0}")]
    Shape(String),

    /// A required nested field was missing at the point of use.
    /// `partial_ops` counts the draw operations already laid out when it was hit.
    #[error("Missing required field `{field}`")]
    FieldAccess { field: String, partial_ops: usize },

    /// Measurement or drawing invoked with an unusable style or width.
    #[error("Render error: {0}")]
    Render(String),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LayoutError> for AppError {
    fn from(err: LayoutError) -> Self {
        match err {
            LayoutError::Shape(msg) => AppError::Validation(msg),
            LayoutError::FieldAccess { .. } => AppError::UnprocessableEntity(err.to_string()),
            other => AppError::Render(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Render(msg) => {
                tracing::error!("PDF generation error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Error generating PDF".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_maps_to_bad_request() {
        let err: AppError = LayoutError::Shape(SHAPE_ERROR_MESSAGE.to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_field_access_maps_to_unprocessable() {
        let err: AppError = LayoutError::FieldAccess {
            field: "contact_info.name".to_string(),
            partial_ops: 0,
        }
        .into();
        assert!(err.to_string().contains("contact_info.name"));
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_render_error_maps_to_internal() {
        let err: AppError = LayoutError::Render("bad width".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
