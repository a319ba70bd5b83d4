use axum::extract::{Path, State};
use foodchain_core::domain::session::{ports::SessionRepository, value_objects::SessionSnapshot};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FinalizeSessionResponse {
    pub data: SessionSnapshot,
}

#[utoipa::path(
    post,
    path = "/sessions/{session_id}/finalize",
    tag = "session",
    summary = "Finalize a session",
    description = "Hands over the committed assignments and people verbatim and removes the session; the snapshot is the sole exported artifact",
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
    responses(
        (status = 200, body = FinalizeSessionResponse)
    ),
)]
pub async fn finalize_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<FinalizeSessionResponse>, ApiError> {
    let session = state
        .session_repository
        .get_by_id(session_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("session {}", session_id)))?;

    let snapshot = session.finalize();

    state
        .session_repository
        .delete(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FinalizeSessionResponse { data: snapshot }))
}
