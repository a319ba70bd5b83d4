use axum::Json;
use axum::extract::{Path, State};
use foodchain_core::domain::{
    session::ports::SessionRepository,
    split::{entities::Assignment, value_objects::SplitRequest},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use crate::application::http::session::validators::CommitSplitRequest;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CommitSplitResponse {
    pub data: Assignment,
}

#[utoipa::path(
    post,
    path = "/sessions/{session_id}/splits",
    tag = "session",
    summary = "Commit a split",
    description = "Assigns a quantity slice of one bill item to a set of people at a per-person price frozen at commit time",
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
    request_body = CommitSplitRequest,
    responses(
        (status = 201, body = CommitSplitResponse)
    ),
)]
pub async fn commit_split(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<CommitSplitRequest>,
) -> Result<Response<CommitSplitResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let mut session = state
        .session_repository
        .get_by_id(session_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("session {}", session_id)))?;

    let assignment = session
        .split_item(SplitRequest {
            item_id: payload.item_id,
            quantity: payload.quantity,
            person_ids: payload.person_ids,
        })
        .map_err(ApiError::from)?;

    state
        .session_repository
        .update(session)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CommitSplitResponse { data: assignment }))
}
