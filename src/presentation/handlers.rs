// HTTP request handlers
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::domain::error::CatalogError;
use crate::presentation::app_state::AppState;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full dashboard, recomputed from the catalog snapshot on every request
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.dashboard_service.build_dashboard() {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(e) => {
            tracing::error!("failed to build dashboard: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Line series for one system subtree and stream name
pub async fn get_system_stream(
    Path((system_id, stream)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match state.series_service.system_stream_series(&system_id, &stream) {
        Ok(series) => Json(series).into_response(),
        Err(CatalogError::SystemNotFound(id)) => {
            (StatusCode::NOT_FOUND, format!("system not found: {id}")).into_response()
        }
        Err(e) => {
            tracing::error!("failed to build series for {}: {}", system_id, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
