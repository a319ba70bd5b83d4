use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// A committed allocation of some quantity of one bill item to a set of
/// people. Immutable once committed: `price_per_person` is frozen at commit
/// time and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Assignment {
    pub id: Uuid,
    pub item_id: Uuid,
    pub assigned_quantity: u32,
    pub assigned_to: Vec<Uuid>,
    pub price_per_person: f64,
    pub created_at: DateTime<Utc>,
}

impl Assignment {
    pub fn new(
        item_id: Uuid,
        assigned_quantity: u32,
        assigned_to: Vec<Uuid>,
        price_per_person: f64,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            item_id,
            assigned_quantity,
            assigned_to,
            price_per_person,
            created_at: now,
        }
    }
}

/// An uncommitted, in-progress split scoped to one item. Starts at quantity
/// 1 with nobody selected; discarded by dropping it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SplitDraft {
    pub item_id: Uuid,
    pub quantity: u32,
    pub selected: Vec<Uuid>,
}

impl SplitDraft {
    pub fn new(item_id: Uuid) -> Self {
        Self {
            item_id,
            quantity: 1,
            selected: Vec::new(),
        }
    }

    /// Symmetric add/remove of a person in the draft selection.
    pub fn toggle_person(&mut self, person_id: Uuid) {
        if let Some(index) = self.selected.iter().position(|id| *id == person_id) {
            self.selected.remove(index);
        } else {
            self.selected.push(person_id);
        }
    }

    pub fn is_selected(&self, person_id: Uuid) -> bool {
        self.selected.contains(&person_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_starts_at_quantity_one_with_empty_selection() {
        let draft = SplitDraft::new(Uuid::new_v4());
        assert_eq!(draft.quantity, 1);
        assert!(draft.selected.is_empty());
    }

    #[test]
    fn test_toggle_person_is_symmetric() {
        let mut draft = SplitDraft::new(Uuid::new_v4());
        let person = Uuid::new_v4();

        draft.toggle_person(person);
        assert!(draft.is_selected(person));

        draft.toggle_person(person);
        assert!(!draft.is_selected(person));
    }
}
