use axum::Json;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::services::DocumentProcessingError;
use crate::domain::ContentType;
use crate::presentation::state::AppState;

use super::error_response::error_response;

const FILE_FIELD: &str = "file";

#[derive(Debug, Default, Deserialize)]
pub struct DocumentQuery {
    #[serde(default)]
    pub summarize: bool,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn documents_handler(
    State(state): State<AppState>,
    Query(query): Query<DocumentQuery>,
    mut multipart: Multipart,
) -> Response {
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.name() == Some(FILE_FIELD) => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Document request with no file");
                return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                );
            }
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let content_type_str = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let content_type = ContentType::from_mime(&content_type_str)
        .or_else(|| ContentType::from_filename(&filename));
    let Some(content_type) = content_type else {
        tracing::warn!(content_type = %content_type_str, filename = %filename, "Unsupported content type");
        return error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!("Unsupported content type: {}", content_type_str),
        );
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return error_response(StatusCode::BAD_REQUEST, format!("Failed to read file: {}", e));
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "Processing document upload");

    if query.summarize {
        match state
            .document_processor
            .process_with_summary(&data, content_type)
            .await
        {
            Ok(processed) => (StatusCode::OK, Json(processed)).into_response(),
            Err(e) => processing_failure(e),
        }
    } else {
        match state.document_processor.process(&data, content_type).await {
            Ok(report) => (StatusCode::OK, Json(report)).into_response(),
            Err(e) => processing_failure(e),
        }
    }
}

fn processing_failure(error: DocumentProcessingError) -> Response {
    tracing::error!(error = %error, "Document processing failed");
    let status = match error {
        DocumentProcessingError::PageExtraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DocumentProcessingError::Ocr(_) => StatusCode::BAD_GATEWAY,
        DocumentProcessingError::Correction(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, error.to_string())
}
