use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

/// Successful handler responses, serialized as JSON with the matching
/// status code.
#[derive(Debug, Clone)]
pub enum Response<T> {
    OK(T),
    Created(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
            Response::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
        }
    }
}
