//! Routing definitions and handlers.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, Path, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::dto::{PointsResponse, ProcessReceiptResponse, ReceiptDetailResponse};
use crate::error::ApiError;
use crate::AppState;

/// Creates the API router with all routes and middleware.
///
/// ```ignore
/// let app = create_router(AppState::new(store), config.max_body_bytes);
/// let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
/// axum::serve(listener, app).await?;
/// ```
pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/receipts/{id}", get(get_receipt))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(middleware::from_fn(log_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Middleware
// =============================================================================

/// Access log: one line per request.
async fn log_route(request: Request, next: Next) -> Response {
    info!("({}) {}", request.method(), request.uri().path());
    next.run(request).await
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint.
async fn health_handler() -> impl IntoResponse {
    "OK"
}

/// `POST /receipts/process`
async fn process_receipt(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ProcessReceiptResponse>, ApiError> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::payload_too_large()
        } else {
            ApiError::internal(rejection.body_text())
        }
    })?;

    let id = state.receipts.submit(&body)?;
    Ok(Json(ProcessReceiptResponse { id }))
}

/// `GET /receipts/{id}/points`
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = state.receipts.points(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// `GET /receipts/{id}`
async fn get_receipt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReceiptDetailResponse>, ApiError> {
    let receipt = state.receipts.receipt(&id)?;
    Ok(Json(ReceiptDetailResponse::from(receipt.as_ref())))
}
