use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{
    api::response::ApiResponse,
    controller::{AppState, StatusView},
    simulation::{HistorySample, OperatingMode},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(get_status))
        .route("/history", get(get_history))
        .route("/mode", get(get_mode).put(set_mode))
        .route("/healthz", get(healthz))
        .with_state(state)
}

pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /api/v1/status - clock, mode and a freshly computed snapshot
pub async fn get_status(State(st): State<AppState>) -> Json<ApiResponse<StatusView>> {
    let status = st.controller.status().await;
    Json(ApiResponse::success(status))
}

/// GET /api/v1/history - retained chart samples, oldest first
pub async fn get_history(
    State(st): State<AppState>,
) -> Json<ApiResponse<Vec<HistorySample>>> {
    let samples = st.controller.history().await;
    let count = samples.len();
    Json(ApiResponse::success(samples).with_count(count))
}

#[derive(Debug, Serialize)]
pub struct ModeView {
    pub mode: OperatingMode,
}

/// GET /api/v1/mode - current operating mode
pub async fn get_mode(State(st): State<AppState>) -> Json<ApiResponse<ModeView>> {
    let mode = st.controller.mode().await;
    Json(ApiResponse::success(ModeView { mode }))
}

#[derive(Debug, Deserialize)]
pub struct ModeRequest {
    pub mode: OperatingMode,
}

/// PUT /api/v1/mode - toggle the operating mode
///
/// Effective on the next snapshot computation; the returned status already
/// reflects the new mode.
pub async fn set_mode(
    State(st): State<AppState>,
    Json(req): Json<ModeRequest>,
) -> Json<ApiResponse<StatusView>> {
    st.controller.set_mode(req.mode).await;
    let status = st.controller.status().await;
    Json(ApiResponse::success(status))
}
