use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

use super::error_response::error_response;
use super::text_request::TextRequest;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectResponse {
    pub corrected_text: String,
    pub corrections_applied: usize,
}

#[tracing::instrument(skip(state, request))]
pub async fn correct_handler(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> impl IntoResponse {
    tracing::debug!(text = %preview_text(&request.text), "Correcting text");

    let engine = Arc::clone(&state.correction_engine);
    let corrected = tokio::task::spawn_blocking(move || engine.correct(&request.text)).await;

    match corrected {
        Ok(result) => {
            tracing::info!(
                corrections_applied = result.corrections_applied,
                "Correction successful"
            );
            (
                StatusCode::OK,
                Json(CorrectResponse {
                    corrected_text: result.text,
                    corrections_applied: result.corrections_applied,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Correction task failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Correction failed")
        }
    }
}
