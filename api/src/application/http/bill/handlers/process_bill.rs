use axum::extract::{Multipart, State};
use foodchain_core::domain::bill::value_objects::ExtractionResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProcessBillResponse {
    pub data: ExtractionResult,
}

#[utoipa::path(
    post,
    path = "/bill/process",
    tag = "bill",
    summary = "Extract line items from a bill photo",
    description = "Forwards the uploaded receipt image to the vision model and returns the parsed line items",
    responses(
        (status = 200, body = ProcessBillResponse)
    ),
)]
pub async fn process_bill(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ProcessBillResponse>, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;
    let mut mime_type = "image/jpeg".to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "image" {
            if let Some(content_type) = field.content_type() {
                mime_type = content_type.to_string();
            }

            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

            if data.len() > MAX_IMAGE_SIZE {
                return Err(ApiError::BadRequest(format!(
                    "Image too large. Max size is {} bytes",
                    MAX_IMAGE_SIZE
                )));
            }

            image_data = Some(data.to_vec());
        }
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let extraction = state
        .service
        .process_bill(image_data, mime_type)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProcessBillResponse { data: extraction }))
}
