use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use foodchain_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidArgument(message) => ApiError::BadRequest(message),
            CoreError::ReferenceNotFound(message) => ApiError::NotFound(message),
            CoreError::CapacityExceeded(message) => ApiError::Conflict(message),
            CoreError::EmptySelection => {
                ApiError::UnprocessableEntity("split has no assigned people".to_string())
            }
            CoreError::ExternalServiceError(message) => ApiError::InternalServerError(message),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ApiErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_expected_variants() {
        assert!(matches!(
            ApiError::from(CoreError::InvalidArgument("bad tip".to_string())),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(CoreError::ReferenceNotFound("person x".to_string())),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(CoreError::CapacityExceeded("over".to_string())),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(CoreError::EmptySelection),
            ApiError::UnprocessableEntity(_)
        ));
        assert!(matches!(
            ApiError::from(CoreError::ExternalServiceError("llm down".to_string())),
            ApiError::InternalServerError(_)
        ));
    }
}
