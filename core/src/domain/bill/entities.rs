use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// One line entry on the source receipt. Immutable after the store is
/// populated from the extraction result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BillItem {
    pub id: Uuid,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
}

impl BillItem {
    pub fn new(name: String, unit_price: f64, quantity: u32) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            unit_price,
            quantity,
            created_at: now,
        }
    }
}
