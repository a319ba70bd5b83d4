use axum::extract::{Path, State};
use foodchain_core::domain::session::{ports::SessionRepository, value_objects::PersonRemoval};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RemovePersonResponse {
    pub data: PersonRemoval,
}

#[utoipa::path(
    delete,
    path = "/sessions/{session_id}/people/{person_id}",
    tag = "session",
    summary = "Remove a person",
    description = "Removes a participant and cascades: every assignment referencing them is dropped; the response lists the invalidated assignment ids. Rejected at the floor of two people",
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
        ("person_id" = Uuid, Path, description = "Person id"),
    ),
    responses(
        (status = 200, body = RemovePersonResponse)
    ),
)]
pub async fn remove_person(
    Path((session_id, person_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<RemovePersonResponse>, ApiError> {
    let mut session = state
        .session_repository
        .get_by_id(session_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("session {}", session_id)))?;

    let removal = session.remove_person(person_id).map_err(ApiError::from)?;

    state
        .session_repository
        .update(session)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RemovePersonResponse { data: removal }))
}
