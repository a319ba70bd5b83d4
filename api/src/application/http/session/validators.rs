use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdatePersonRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "name must be between 1 and 100 characters"
    ))]
    pub name: Option<String>,
    #[validate(range(min = 0.0, message = "tip_percentage must be non-negative"))]
    pub tip_percentage: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CommitSplitRequest {
    pub item_id: Uuid,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: u32,
    #[validate(length(min = 1, message = "person_ids must not be empty"))]
    pub person_ids: Vec<Uuid>,
}
