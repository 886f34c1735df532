//! Axum route handlers for the PDF generation API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde_json::Value;

use crate::errors::AppError;
use crate::generation::generator::{generate_pdf, GenerateOptions};
use crate::models::resume::ResumeDocument;
use crate::state::AppState;

pub const PDF_FILENAME: &str = "resume.pdf";

/// POST /api/generate-pdf
///
/// Body: `{"optimized_resume": {...}}`. The shape is checked before any work
/// starts; layout and emission then run on the blocking pool. The response is
/// only committed once the whole PDF exists.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let doc = ResumeDocument::from_request(&body)?;

    let styles = state.styles;
    let options = GenerateOptions {
        compress: state.config.pdf_compress,
    };

    // CPU-bound; spawn_blocking keeps the async executor free.
    let pdf = tokio::task::spawn_blocking(move || generate_pdf(&doc, styles, &options))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in generation: {e}"))
        })??;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{PDF_FILENAME}\""),
            ),
        ],
        Bytes::from(pdf),
    )
        .into_response())
}
