use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    bill::{entities::BillItem, services::BillItemStore},
    common::{entities::app_errors::CoreError, policies::ensure},
    people::services::PersonRegistry,
    split::entities::{Assignment, SplitDraft},
};

/// Append-only collection of committed assignments. Records are only ever
/// removed by the cascading deletion that follows a person removal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct AssignmentLedger {
    assignments: Vec<Assignment>,
}

impl AssignmentLedger {
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Total quantity of one item already claimed by committed assignments.
    pub fn assigned_quantity(&self, item_id: Uuid) -> u32 {
        self.assignments
            .iter()
            .filter(|assignment| assignment.item_id == item_id)
            .map(|assignment| assignment.assigned_quantity)
            .sum()
    }

    /// `item.quantity - Σ assigned_quantity`; never negative because commits
    /// are bounded by this value.
    pub fn unclaimed_quantity(&self, item: &BillItem) -> u32 {
        item.quantity.saturating_sub(self.assigned_quantity(item.id))
    }

    /// Opens a draft for an item that still has unclaimed quantity.
    pub fn start_split(
        &self,
        items: &BillItemStore,
        item_id: Uuid,
    ) -> Result<SplitDraft, CoreError> {
        let item = items.get(item_id)?;

        ensure(
            self.unclaimed_quantity(item) > 0,
            CoreError::CapacityExceeded(format!(
                "item '{}' has no unclaimed quantity left",
                item.name
            )),
        )?;

        Ok(SplitDraft::new(item_id))
    }

    /// Constrains the draft quantity to `1..=unclaimed`. The permitted range
    /// is recomputed against the live ledger on every call, not against the
    /// item's total quantity.
    pub fn set_draft_quantity(
        &self,
        items: &BillItemStore,
        draft: &mut SplitDraft,
        quantity: u32,
    ) -> Result<(), CoreError> {
        ensure(
            quantity >= 1,
            CoreError::InvalidArgument("split quantity must be at least 1".to_string()),
        )?;

        let item = items.get(draft.item_id)?;
        let unclaimed = self.unclaimed_quantity(item);
        ensure(
            quantity <= unclaimed,
            CoreError::CapacityExceeded(format!(
                "requested quantity {} exceeds unclaimed quantity {}",
                quantity, unclaimed
            )),
        )?;

        draft.quantity = quantity;
        Ok(())
    }

    /// Commits a draft as a new immutable assignment. All preconditions are
    /// checked before the ledger is touched; a rejected commit leaves it
    /// unchanged.
    pub fn commit_split(
        &mut self,
        items: &BillItemStore,
        people: &PersonRegistry,
        draft: SplitDraft,
    ) -> Result<Assignment, CoreError> {
        ensure(!draft.selected.is_empty(), CoreError::EmptySelection)?;

        let item = items.get(draft.item_id)?;
        for person_id in &draft.selected {
            ensure(
                people.contains(*person_id),
                CoreError::ReferenceNotFound(format!("person {}", person_id)),
            )?;
        }

        ensure(
            draft.quantity >= 1,
            CoreError::InvalidArgument("split quantity must be at least 1".to_string()),
        )?;
        let unclaimed = self.unclaimed_quantity(item);
        ensure(
            draft.quantity <= unclaimed,
            CoreError::CapacityExceeded(format!(
                "requested quantity {} exceeds unclaimed quantity {}",
                draft.quantity, unclaimed
            )),
        )?;

        // Frozen at commit time; later price or people changes do not touch it.
        let price_per_person =
            (item.unit_price * f64::from(draft.quantity)) / draft.selected.len() as f64;

        let assignment = Assignment::new(
            draft.item_id,
            draft.quantity,
            draft.selected,
            price_per_person,
        );
        self.assignments.push(assignment.clone());

        Ok(assignment)
    }

    /// Cascading deletion: drops the whole record for every assignment
    /// whose `assigned_to` contains the person, not just the membership.
    /// Returns the invalidated assignment ids so callers can reconcile any
    /// cached view.
    pub fn remove_assignments_for(&mut self, person_id: Uuid) -> Vec<Uuid> {
        let invalidated: Vec<Uuid> = self
            .assignments
            .iter()
            .filter(|assignment| assignment.assigned_to.contains(&person_id))
            .map(|assignment| assignment.id)
            .collect();

        self.assignments
            .retain(|assignment| !assignment.assigned_to.contains(&person_id));

        invalidated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bill::entities::BillItem;

    fn store_with(name: &str, unit_price: f64, quantity: u32) -> (BillItemStore, Uuid) {
        let item = BillItem::new(name.to_string(), unit_price, quantity);
        let item_id = item.id;
        (BillItemStore::new(vec![item]), item_id)
    }

    fn committed(
        ledger: &mut AssignmentLedger,
        items: &BillItemStore,
        people: &PersonRegistry,
        item_id: Uuid,
        quantity: u32,
        selected: &[Uuid],
    ) -> Uuid {
        let mut draft = ledger.start_split(items, item_id).unwrap();
        ledger.set_draft_quantity(items, &mut draft, quantity).unwrap();
        for person_id in selected {
            draft.toggle_person(*person_id);
        }
        ledger.commit_split(items, people, draft).unwrap().id
    }

    #[test]
    fn test_start_split_rejected_when_nothing_unclaimed() {
        let (items, item_id) = store_with("Burger", 100.0, 1);
        let people = PersonRegistry::new();
        let a = people.people()[0].id;
        let mut ledger = AssignmentLedger::default();

        committed(&mut ledger, &items, &people, item_id, 1, &[a]);

        let err = ledger.start_split(&items, item_id).unwrap_err();
        assert!(matches!(err, CoreError::CapacityExceeded(_)));
    }

    #[test]
    fn test_draft_quantity_bounded_by_live_unclaimed_quantity() {
        let (items, item_id) = store_with("Pizza", 80.0, 3);
        let people = PersonRegistry::new();
        let a = people.people()[0].id;
        let mut ledger = AssignmentLedger::default();

        committed(&mut ledger, &items, &people, item_id, 2, &[a]);

        // Only 1 of 3 remains unclaimed; the range reflects the ledger, not
        // the item's total quantity.
        let mut draft = ledger.start_split(&items, item_id).unwrap();
        assert!(matches!(
            ledger.set_draft_quantity(&items, &mut draft, 2),
            Err(CoreError::CapacityExceeded(_))
        ));
        assert!(ledger.set_draft_quantity(&items, &mut draft, 1).is_ok());
        assert!(matches!(
            ledger.set_draft_quantity(&items, &mut draft, 0),
            Err(CoreError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_commit_with_empty_selection_leaves_ledger_untouched() {
        let (items, item_id) = store_with("Salad", 30.0, 2);
        let people = PersonRegistry::new();
        let mut ledger = AssignmentLedger::default();

        let draft = ledger.start_split(&items, item_id).unwrap();
        let err = ledger.commit_split(&items, &people, draft).unwrap_err();

        assert_eq!(err, CoreError::EmptySelection);
        assert!(ledger.assignments().is_empty());
        assert_eq!(ledger.unclaimed_quantity(items.get(item_id).unwrap()), 2);
    }

    #[test]
    fn test_commit_with_stale_person_is_rejected() {
        let (items, item_id) = store_with("Soup", 25.0, 1);
        let people = PersonRegistry::new();
        let mut ledger = AssignmentLedger::default();

        let mut draft = ledger.start_split(&items, item_id).unwrap();
        draft.toggle_person(Uuid::new_v4());

        let err = ledger.commit_split(&items, &people, draft).unwrap_err();
        assert!(matches!(err, CoreError::ReferenceNotFound(_)));
        assert!(ledger.assignments().is_empty());
    }

    #[test]
    fn test_commit_freezes_price_per_person() {
        let (items, item_id) = store_with("Burger", 100.0, 2);
        let people = PersonRegistry::new();
        let a = people.people()[0].id;
        let b = people.people()[1].id;
        let mut ledger = AssignmentLedger::default();

        let mut draft = ledger.start_split(&items, item_id).unwrap();
        ledger.set_draft_quantity(&items, &mut draft, 2).unwrap();
        draft.toggle_person(a);
        draft.toggle_person(b);

        let assignment = ledger.commit_split(&items, &people, draft).unwrap();
        assert_eq!(assignment.price_per_person, 100.0);
        assert_eq!(assignment.assigned_quantity, 2);
        assert_eq!(assignment.assigned_to.len(), 2);
    }

    #[test]
    fn test_total_assigned_never_exceeds_item_quantity() {
        let (items, item_id) = store_with("Wings", 45.0, 3);
        let people = PersonRegistry::new();
        let a = people.people()[0].id;
        let mut ledger = AssignmentLedger::default();

        committed(&mut ledger, &items, &people, item_id, 2, &[a]);
        committed(&mut ledger, &items, &people, item_id, 1, &[a]);

        let item = items.get(item_id).unwrap();
        assert_eq!(ledger.assigned_quantity(item_id), 3);
        assert_eq!(ledger.unclaimed_quantity(item), 0);

        // A concurrent stale draft can no longer commit.
        let mut stale = SplitDraft::new(item_id);
        stale.quantity = 1;
        stale.toggle_person(a);
        let err = ledger.commit_split(&items, &people, stale).unwrap_err();
        assert!(matches!(err, CoreError::CapacityExceeded(_)));
        assert_eq!(ledger.assigned_quantity(item_id), 3);
    }

    #[test]
    fn test_cascading_removal_drops_whole_records() {
        let (items, item_id) = store_with("Platter", 60.0, 3);
        let people = PersonRegistry::new();
        let a = people.people()[0].id;
        let b = people.people()[1].id;
        let mut ledger = AssignmentLedger::default();

        let kept = committed(&mut ledger, &items, &people, item_id, 1, &[a]);
        let shared = committed(&mut ledger, &items, &people, item_id, 2, &[a, b]);

        let invalidated = ledger.remove_assignments_for(b);

        assert_eq!(invalidated, vec![shared]);
        assert_eq!(ledger.assignments().len(), 1);
        assert_eq!(ledger.assignments()[0].id, kept);
        // The shared record is gone entirely, so its quantity is unclaimed
        // again.
        assert_eq!(ledger.unclaimed_quantity(items.get(item_id).unwrap()), 2);
    }
}
