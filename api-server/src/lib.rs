// Library interface for api-server

pub mod config;
pub mod routes;
pub mod util;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use diag_log::Log;
use envelope::ApiResponse;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub started_at: Instant,
    pub log: Arc<Log>,
}

impl AppState {
    pub fn new(log: Arc<Log>) -> Self {
        Self {
            started_at: Instant::now(),
            log,
        }
    }

    /// Seconds elapsed since the state was created.
    pub fn uptime(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

// Every error leaves the service as an error envelope
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct AppError {
    pub status_code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "not found")
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status_code,
            Json(ApiResponse::<()>::error(self.message)),
        )
            .into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

// Fallback handler for 404s
async fn not_found() -> AppError {
    AppError::not_found()
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::health))
        .route("/health", get(routes::health))
        .route("/api/echo", post(routes::echo))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .with_state(state)
}
