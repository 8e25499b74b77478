use crate::transport::http::handlers::common::data_response;
use crate::transport::http::types::{ApiResponse, AppState, HealthStatus};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy (DB reachable)", body = ApiResponse),
        (status = 503, description = "Service is unhealthy (DB unreachable)", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.store_health.ping().await {
        Ok(()) => data_response(
            StatusCode::OK,
            &HealthStatus {
                status: "healthy".to_string(),
                database: "connected".to_string(),
            },
        ),
        Err(e) => {
            tracing::error!(error = %e, "health check: database ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    success: false,
                    data: Some(serde_json::json!({ "status": "unhealthy", "database": "disconnected" })),
                    error: Some("Database connection failed".to_string()),
                }),
            )
                .into_response()
        }
    }
}
