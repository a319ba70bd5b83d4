use axum::extract::{Path, State};
use foodchain_core::domain::{
    allocation::value_objects::AllocationSummary, session::ports::SessionRepository,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AllocationResponse {
    pub data: AllocationSummary,
}

#[utoipa::path(
    get,
    path = "/sessions/{session_id}/allocation",
    tag = "session",
    summary = "Get the allocation summary",
    description = "Per-item unclaimed quantities, per-person subtotal/tip/total, and group reconciliation totals, derived fresh from the session state",
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
    responses(
        (status = 200, body = AllocationResponse)
    ),
)]
pub async fn get_allocation(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<AllocationResponse>, ApiError> {
    let session = state
        .session_repository
        .get_by_id(session_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("session {}", session_id)))?;

    Ok(Response::OK(AllocationResponse {
        data: session.summary(),
    }))
}
