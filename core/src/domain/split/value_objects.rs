use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One-shot split commit input used by callers that do not drive the draft
/// interactively (e.g. the HTTP adapter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SplitRequest {
    pub item_id: Uuid,
    pub quantity: u32,
    pub person_ids: Vec<Uuid>,
}
