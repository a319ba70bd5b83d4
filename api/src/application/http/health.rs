use axum::{Router, routing::get};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub checked_at: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = HealthResponse)
    )
)]
pub async fn health() -> Response<HealthResponse> {
    Response::OK(HealthResponse {
        status: "ok".to_string(),
        checked_at: Utc::now(),
    })
}

#[derive(OpenApi)]
#[openapi(paths(health))]
pub struct HealthApiDoc;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
