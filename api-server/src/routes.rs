use crate::{AppError, AppResult, AppState};
use axum::{extract::State, Json};
use chrono::Utc;
use diag_log::diag;
use envelope::{narrow, ApiResponse};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Serialize)]
pub struct HealthData {
    /// Seconds since the service state was created.
    pub uptime: f64,
    /// Unix epoch milliseconds.
    pub timestamp: i64,
}

/// Health check endpoint
///
/// Always answers `{isOk: true, mssg: "ok", data: {uptime, timestamp}}`.
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthData>> {
    let data = HealthData {
        uptime: state.uptime(),
        timestamp: Utc::now().timestamp_millis(),
    };
    debug!(uptime = data.uptime, "health check");

    Json(ApiResponse::ok("ok", data))
}

/// Echoes a request body back if it is shaped like an envelope.
pub async fn echo(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<Value>> {
    let Some(view) = narrow(&body).view() else {
        diag!(state.log, warn, "rejected request body: not an envelope");
        return Err(AppError::unprocessable("invalid envelope"));
    };
    diag!(
        state.log,
        debug,
        "echoing envelope:",
        view.mssg().unwrap_or("<non-string mssg>")
    );

    Ok(Json(body))
}
