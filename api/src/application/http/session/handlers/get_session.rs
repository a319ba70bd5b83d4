use axum::extract::{Path, State};
use foodchain_core::domain::session::ports::SessionRepository;
use uuid::Uuid;

use super::create_session::SessionResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/sessions/{session_id}",
    tag = "session",
    summary = "Get a split session",
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
    responses(
        (status = 200, body = SessionResponse)
    ),
)]
pub async fn get_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    let session = state
        .session_repository
        .get_by_id(session_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("session {}", session_id)))?;

    Ok(Response::OK(SessionResponse::from(&session)))
}
