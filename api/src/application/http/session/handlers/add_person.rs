use axum::extract::{Path, State};
use foodchain_core::domain::{people::entities::Person, session::ports::SessionRepository};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddPersonResponse {
    pub data: Person,
}

#[utoipa::path(
    post,
    path = "/sessions/{session_id}/people",
    tag = "session",
    summary = "Add a person",
    description = "Adds a participant with a synthesized name and the default tip percentage",
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
    responses(
        (status = 201, body = AddPersonResponse)
    ),
)]
pub async fn add_person(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<AddPersonResponse>, ApiError> {
    let mut session = state
        .session_repository
        .get_by_id(session_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("session {}", session_id)))?;

    let person = session.add_person();

    state
        .session_repository
        .update(session)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddPersonResponse { data: person }))
}
