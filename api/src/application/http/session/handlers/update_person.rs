use axum::Json;
use axum::extract::{Path, State};
use foodchain_core::domain::{people::entities::Person, session::ports::SessionRepository};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use crate::application::http::session::validators::UpdatePersonRequest;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdatePersonResponse {
    pub data: Person,
}

#[utoipa::path(
    patch,
    path = "/sessions/{session_id}/people/{person_id}",
    tag = "session",
    summary = "Rename a person or change their tip",
    description = "In-place update of a participant's display name and/or tip percentage; tips apply live to already-committed splits",
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
        ("person_id" = Uuid, Path, description = "Person id"),
    ),
    request_body = UpdatePersonRequest,
    responses(
        (status = 200, body = UpdatePersonResponse)
    ),
)]
pub async fn update_person(
    Path((session_id, person_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    Json(payload): Json<UpdatePersonRequest>,
) -> Result<Response<UpdatePersonResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let mut session = state
        .session_repository
        .get_by_id(session_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("session {}", session_id)))?;

    if let Some(tip_percentage) = payload.tip_percentage {
        session
            .set_tip(person_id, tip_percentage)
            .map_err(ApiError::from)?;
    }

    if let Some(name) = payload.name {
        session
            .rename_person(person_id, name)
            .map_err(ApiError::from)?;
    }

    let person = session.people().get(person_id).map_err(ApiError::from)?.clone();

    state
        .session_repository
        .update(session)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdatePersonResponse { data: person }))
}
