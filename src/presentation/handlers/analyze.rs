use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::presentation::state::AppState;

use super::text_request::TextRequest;

#[tracing::instrument(skip(state, request))]
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> impl IntoResponse {
    let analysis = state.content_analyzer.analyze(&request.text);
    (StatusCode::OK, Json(analysis))
}
