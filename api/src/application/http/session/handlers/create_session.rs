use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use foodchain_core::domain::{
    allocation::value_objects::AllocationSummary,
    bill::value_objects::ExtractionResult,
    session::{entities::SplitSession, ports::SessionRepository},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SessionResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub summary: AllocationSummary,
}

impl From<&SplitSession> for SessionResponse {
    fn from(session: &SplitSession) -> Self {
        Self {
            id: session.id,
            created_at: session.created_at,
            summary: session.summary(),
        }
    }
}

#[utoipa::path(
    post,
    path = "/sessions",
    tag = "session",
    summary = "Create a split session",
    description = "Creates a bill split session from an extraction result, seeded with two people",
    request_body = ExtractionResult,
    responses(
        (status = 201, body = SessionResponse)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
    Json(extraction): Json<ExtractionResult>,
) -> Result<Response<SessionResponse>, ApiError> {
    let session = SplitSession::from_extraction(&extraction).map_err(ApiError::from)?;

    let session = state
        .session_repository
        .create(session)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SessionResponse::from(&session)))
}
