use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    bill::{entities::BillItem, value_objects::ExtractionResult},
    common::entities::app_errors::CoreError,
};

/// Immutable-after-load list of purchased items, populated once from the
/// extraction result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct BillItemStore {
    items: Vec<BillItem>,
}

impl BillItemStore {
    pub fn new(items: Vec<BillItem>) -> Self {
        Self { items }
    }

    /// Builds the store from an extraction result. Quantity defaults to 1
    /// when the model omitted it; a quantity of 0 is treated the same way.
    pub fn from_extraction(extraction: &ExtractionResult) -> Result<Self, CoreError> {
        let mut items = Vec::with_capacity(extraction.items.len());

        for extracted in &extraction.items {
            if !extracted.price.is_finite() || extracted.price < 0.0 {
                return Err(CoreError::InvalidArgument(format!(
                    "item '{}' has invalid unit price {}",
                    extracted.name, extracted.price
                )));
            }

            let quantity = extracted.quantity.unwrap_or(1).max(1);
            items.push(BillItem::new(extracted.name.clone(), extracted.price, quantity));
        }

        Ok(Self { items })
    }

    pub fn get(&self, item_id: Uuid) -> Result<&BillItem, CoreError> {
        self.items
            .iter()
            .find(|item| item.id == item_id)
            .ok_or_else(|| CoreError::ReferenceNotFound(format!("bill item {}", item_id)))
    }

    pub fn items(&self) -> &[BillItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
