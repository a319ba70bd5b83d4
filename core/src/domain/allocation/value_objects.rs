use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Per-item view for the results screen: how much of each line is still
/// unclaimed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemAllocation {
    pub item_id: Uuid,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub assigned_quantity: u32,
    pub unclaimed_quantity: u32,
}

/// Per-person breakdown: subtotal from committed assignments, live tip,
/// total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonAllocation {
    pub person_id: Uuid,
    pub name: String,
    pub color: String,
    pub tip_percentage: f64,
    pub subtotal: f64,
    pub tip: f64,
    pub total: f64,
}

/// Group-level reconciliation totals. `bill_total` is the nominal amount
/// from the source receipt; `assigned_total` is what has actually been
/// allocated so far; they only meet once every quantity is claimed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupTotals {
    pub bill_total: f64,
    pub assigned_total: f64,
    pub tip_total: f64,
    pub group_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AllocationSummary {
    pub items: Vec<ItemAllocation>,
    pub people: Vec<PersonAllocation>,
    pub totals: GroupTotals,
}
