//! Analysis endpoint
//!
//! Validates the request from the interaction surface and runs the
//! pipeline. Per-stage failures come back with status 200 and a terminal
//! status in the body: they are data, not transport errors. Only an
//! invalid request is rejected outright.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use serde::Serialize;
use tracing::info;

use newsdesk_core::{AnalysisRequest, MAX_SEARCH_DEPTH, MIN_SEARCH_DEPTH};

use crate::AppState;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Run one analysis request
async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> impl IntoResponse {
    if let Err(message) = validate(&request) {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response();
    }

    info!(
        "Analysis requested: topic='{}', depth={}, type={:?}",
        request.topic, request.depth, request.analysis_type
    );

    let response = state.analysis_service.analyze(&request).await;

    (StatusCode::OK, Json(response)).into_response()
}

/// Reject requests the pipeline should never see
fn validate(request: &AnalysisRequest) -> Result<(), String> {
    if request.topic.trim().is_empty() {
        return Err("Please enter a news topic to analyze.".to_string());
    }
    if request.depth < MIN_SEARCH_DEPTH || request.depth > MAX_SEARCH_DEPTH {
        return Err(format!(
            "Search depth must be between {} and {}.",
            MIN_SEARCH_DEPTH, MAX_SEARCH_DEPTH
        ));
    }
    Ok(())
}

/// Create analysis routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze))
}
