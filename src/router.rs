// HTTP API implementation
// This file wires the primality, echo, metrics and health endpoints
// into an axum router
//
// Numan Thabit 2025 Nov

use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router as AxumRouter,
};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::metrics;
use crate::state::AppState;

/// Create the HTTP router with API endpoints
pub fn create_api_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/health", get(health_check))
        .route("/isPrime", get(is_prime))
        .route("/echoNumber", get(echo_number))
        .route("/metrics", get(export_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// GET /isPrime?number=<int>
async fn is_prime(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    state.primality.handle(query.as_deref())
}

/// GET /echoNumber?number=<int>
async fn echo_number(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    state.echo.handle(query.as_deref())
}

/// Prometheus text exposition of every registered service
async fn export_metrics(State(state): State<AppState>) -> Response {
    match metrics::render(state.registry()) {
        Ok(body) => ([(header::CONTENT_TYPE, metrics::content_type())], body).into_response(),
        Err(err) => {
            error!(error = %err, "metrics encoding failed");
            err.into_response()
        }
    }
}
