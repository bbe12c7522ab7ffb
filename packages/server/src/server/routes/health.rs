use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    webhook_configured: bool,
}

/// Health check endpoint
///
/// Always 200 while the process is serving. `webhook_configured` is false
/// when live runs would fail for lack of settings; uploads still work then.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            webhook_configured: state.config.webhook.is_configured(),
        }),
    )
}
