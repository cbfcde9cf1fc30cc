use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

use super::text_request::TextRequest;

/// Always 200: a summary that could not be produced is reported through
/// `diagnostics.reason`.
#[tracing::instrument(skip(state, request))]
pub async fn summarize_handler(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> impl IntoResponse {
    tracing::debug!(text = %preview_text(&request.text), "Summarizing text");

    let outcome = state.summary_orchestrator.summarize(&request.text).await;
    tracing::info!(
        generated = outcome.is_generated(),
        reason = %outcome.diagnostics.reason,
        "Summarize request handled"
    );
    (StatusCode::OK, Json(outcome))
}
