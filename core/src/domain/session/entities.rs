use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    allocation::{services as allocation, value_objects::AllocationSummary},
    bill::{services::BillItemStore, value_objects::ExtractionResult},
    common::{entities::app_errors::CoreError, generate_timestamp, policies::ensure},
    people::{entities::Person, services::PersonRegistry},
    split::{
        entities::{Assignment, SplitDraft},
        services::AssignmentLedger,
        value_objects::SplitRequest,
    },
    session::value_objects::{PersonRemoval, SessionSnapshot},
};

/// One bill-splitting session: the single owner of the item store, person
/// registry and assignment ledger. All mutation goes through it; reads
/// never mutate. At most one split draft is open at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SplitSession {
    pub id: Uuid,
    items: BillItemStore,
    people: PersonRegistry,
    ledger: AssignmentLedger,
    draft: Option<SplitDraft>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SplitSession {
    pub fn new(items: BillItemStore) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            items,
            people: PersonRegistry::new(),
            ledger: AssignmentLedger::default(),
            draft: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn from_extraction(extraction: &ExtractionResult) -> Result<Self, CoreError> {
        Ok(Self::new(BillItemStore::from_extraction(extraction)?))
    }

    pub fn items(&self) -> &BillItemStore {
        &self.items
    }

    pub fn people(&self) -> &PersonRegistry {
        &self.people
    }

    pub fn ledger(&self) -> &AssignmentLedger {
        &self.ledger
    }

    pub fn draft(&self) -> Option<&SplitDraft> {
        self.draft.as_ref()
    }

    // --- person operations ------------------------------------------------

    pub fn add_person(&mut self) -> Person {
        let person = self.people.add_person();
        self.touch();
        person
    }

    /// Removes a person and cascades: every assignment referencing them is
    /// dropped from the ledger, and they are pruned from any open draft
    /// selection. Rejected at the floor of two people with the registry,
    /// ledger and draft untouched.
    pub fn remove_person(&mut self, person_id: Uuid) -> Result<PersonRemoval, CoreError> {
        let person = self.people.remove_person(person_id)?;
        let invalidated_assignments = self.ledger.remove_assignments_for(person_id);

        if let Some(draft) = self.draft.as_mut() {
            if draft.is_selected(person_id) {
                draft.toggle_person(person_id);
            }
        }

        self.touch();
        Ok(PersonRemoval {
            person,
            invalidated_assignments,
        })
    }

    pub fn rename_person(&mut self, person_id: Uuid, name: String) -> Result<(), CoreError> {
        self.people.rename_person(person_id, name)?;
        self.touch();
        Ok(())
    }

    pub fn set_tip(&mut self, person_id: Uuid, tip_percentage: f64) -> Result<(), CoreError> {
        self.people.set_tip(person_id, tip_percentage)?;
        self.touch();
        Ok(())
    }

    pub fn color_for(&self, person_id: Uuid) -> Result<&'static str, CoreError> {
        self.people.color_for(person_id)
    }

    // --- split draft lifecycle: Idle -> Drafting -> {Committed, Discarded}

    /// Opens a draft for an item. An already-open draft is replaced, the
    /// same way selecting "split" on another row resets the in-progress
    /// split.
    pub fn start_split(&mut self, item_id: Uuid) -> Result<&SplitDraft, CoreError> {
        let draft = self.ledger.start_split(&self.items, item_id)?;
        self.touch();

        Ok(&*self.draft.insert(draft))
    }

    pub fn set_draft_quantity(&mut self, quantity: u32) -> Result<(), CoreError> {
        let draft = self
            .draft
            .as_mut()
            .ok_or_else(|| CoreError::InvalidArgument("no split in progress".to_string()))?;

        self.ledger.set_draft_quantity(&self.items, draft, quantity)?;
        self.touch();
        Ok(())
    }

    pub fn toggle_draft_person(&mut self, person_id: Uuid) -> Result<(), CoreError> {
        ensure(
            self.people.contains(person_id),
            CoreError::ReferenceNotFound(format!("person {}", person_id)),
        )?;

        let draft = self
            .draft
            .as_mut()
            .ok_or_else(|| CoreError::InvalidArgument("no split in progress".to_string()))?;

        draft.toggle_person(person_id);
        self.touch();
        Ok(())
    }

    /// Commits the open draft as an immutable assignment. On rejection the
    /// draft stays open so the caller can fix the selection and retry.
    pub fn commit_split(&mut self) -> Result<Assignment, CoreError> {
        let draft = self
            .draft
            .clone()
            .ok_or_else(|| CoreError::InvalidArgument("no split in progress".to_string()))?;

        let assignment = self.ledger.commit_split(&self.items, &self.people, draft)?;
        self.draft = None;
        self.touch();

        Ok(assignment)
    }

    pub fn discard_split(&mut self) -> Option<SplitDraft> {
        let discarded = self.draft.take();
        if discarded.is_some() {
            self.touch();
        }

        discarded
    }

    /// One-shot split commit for non-interactive callers; drives the same
    /// draft lifecycle internally and leaves any interactive draft alone on
    /// failure.
    pub fn split_item(&mut self, request: SplitRequest) -> Result<Assignment, CoreError> {
        let mut draft = self.ledger.start_split(&self.items, request.item_id)?;
        self.ledger
            .set_draft_quantity(&self.items, &mut draft, request.quantity)?;
        for person_id in request.person_ids {
            draft.toggle_person(person_id);
        }

        let assignment = self.ledger.commit_split(&self.items, &self.people, draft)?;
        self.touch();

        Ok(assignment)
    }

    // --- derived views ----------------------------------------------------

    pub fn unclaimed_quantity(&self, item_id: Uuid) -> Result<u32, CoreError> {
        let item = self.items.get(item_id)?;
        Ok(self.ledger.unclaimed_quantity(item))
    }

    pub fn summary(&self) -> AllocationSummary {
        allocation::summarize(&self.items, &self.people, &self.ledger)
    }

    /// The verbatim handover pair for the downstream collaborator.
    pub fn finalize(&self) -> SessionSnapshot {
        SessionSnapshot {
            assignments: self.ledger.assignments().to_vec(),
            people: self.people.people().to_vec(),
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bill::entities::BillItem;

    fn session_with(name: &str, unit_price: f64, quantity: u32) -> (SplitSession, Uuid) {
        let item = BillItem::new(name.to_string(), unit_price, quantity);
        let item_id = item.id;
        (SplitSession::new(BillItemStore::new(vec![item])), item_id)
    }

    #[test]
    fn test_draft_lifecycle_commit() {
        let (mut session, item_id) = session_with("Burger", 100.0, 2);
        let a = session.people().people()[0].id;
        let b = session.people().people()[1].id;

        session.start_split(item_id).unwrap();
        session.set_draft_quantity(2).unwrap();
        session.toggle_draft_person(a).unwrap();
        session.toggle_draft_person(b).unwrap();

        let assignment = session.commit_split().unwrap();
        assert_eq!(assignment.price_per_person, 100.0);
        assert!(session.draft().is_none());
        assert_eq!(session.unclaimed_quantity(item_id).unwrap(), 0);
    }

    #[test]
    fn test_draft_lifecycle_discard_has_no_ledger_effect() {
        let (mut session, item_id) = session_with("Pizza", 60.0, 1);
        let a = session.people().people()[0].id;

        session.start_split(item_id).unwrap();
        session.toggle_draft_person(a).unwrap();
        let discarded = session.discard_split();

        assert!(discarded.is_some());
        assert!(session.draft().is_none());
        assert!(session.ledger().assignments().is_empty());
        assert_eq!(session.unclaimed_quantity(item_id).unwrap(), 1);
    }

    #[test]
    fn test_draft_operations_require_an_open_draft() {
        let (mut session, _) = session_with("Tea", 5.0, 1);
        let a = session.people().people()[0].id;

        assert!(matches!(
            session.set_draft_quantity(1),
            Err(CoreError::InvalidArgument(_))
        ));
        assert!(matches!(
            session.toggle_draft_person(a),
            Err(CoreError::InvalidArgument(_))
        ));
        assert!(matches!(
            session.commit_split(),
            Err(CoreError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_failed_commit_keeps_draft_open_and_ledger_clean() {
        let (mut session, item_id) = session_with("Cake", 40.0, 1);

        session.start_split(item_id).unwrap();
        let err = session.commit_split().unwrap_err();

        assert_eq!(err, CoreError::EmptySelection);
        assert!(session.draft().is_some());
        assert!(session.ledger().assignments().is_empty());
    }

    /// Quantity 3 split twice (1 to A, 2 to A+B); removing B drops the
    /// shared assignment entirely, so 2 units are unclaimed again.
    #[test]
    fn test_remove_person_cascade_reopens_quantity() {
        let (mut session, item_id) = session_with("Platter", 50.0, 3);
        let a = session.people().people()[0].id;
        let b = session.people().people()[1].id;
        session.add_person();

        session
            .split_item(SplitRequest {
                item_id,
                quantity: 1,
                person_ids: vec![a],
            })
            .unwrap();
        session
            .split_item(SplitRequest {
                item_id,
                quantity: 2,
                person_ids: vec![a, b],
            })
            .unwrap();
        assert_eq!(session.unclaimed_quantity(item_id).unwrap(), 0);

        let removal = session.remove_person(b).unwrap();
        assert_eq!(removal.person.id, b);
        assert_eq!(removal.invalidated_assignments.len(), 1);
        assert_eq!(session.ledger().assignments().len(), 1);
        assert_eq!(session.unclaimed_quantity(item_id).unwrap(), 2);

        for assignment in session.ledger().assignments() {
            assert!(!assignment.assigned_to.contains(&b));
        }
    }

    #[test]
    fn test_remove_person_at_floor_is_a_state_noop() {
        let (mut session, item_id) = session_with("Burger", 10.0, 1);
        let a = session.people().people()[0].id;

        session
            .split_item(SplitRequest {
                item_id,
                quantity: 1,
                person_ids: vec![a],
            })
            .unwrap();

        let before = session.finalize();
        assert!(session.remove_person(a).is_err());
        assert_eq!(session.finalize(), before);
    }

    #[test]
    fn test_remove_person_prunes_open_draft_selection() {
        let (mut session, item_id) = session_with("Wine", 90.0, 1);
        let b = session.people().people()[1].id;
        session.add_person();

        session.start_split(item_id).unwrap();
        session.toggle_draft_person(b).unwrap();
        session.remove_person(b).unwrap();

        let draft = session.draft().unwrap();
        assert!(!draft.is_selected(b));
    }

    #[test]
    fn test_start_split_replaces_open_draft() {
        let burger = BillItem::new("Burger".to_string(), 20.0, 1);
        let fries = BillItem::new("Fries".to_string(), 5.0, 1);
        let burger_id = burger.id;
        let fries_id = fries.id;
        let mut session = SplitSession::new(BillItemStore::new(vec![burger, fries]));
        let a = session.people().people()[0].id;

        session.start_split(burger_id).unwrap();
        session.toggle_draft_person(a).unwrap();

        session.start_split(fries_id).unwrap();
        let draft = session.draft().unwrap();
        assert_eq!(draft.item_id, fries_id);
        assert_eq!(draft.quantity, 1);
        assert!(draft.selected.is_empty());
    }

    #[test]
    fn test_finalize_hands_over_ledger_and_people_verbatim() {
        let (mut session, item_id) = session_with("Burger", 100.0, 2);
        let a = session.people().people()[0].id;

        session
            .split_item(SplitRequest {
                item_id,
                quantity: 2,
                person_ids: vec![a],
            })
            .unwrap();

        let snapshot = session.finalize();
        assert_eq!(snapshot.assignments, session.ledger().assignments().to_vec());
        assert_eq!(snapshot.people, session.people().people().to_vec());
    }

    #[test]
    fn test_unclaimed_quantity_never_negative_across_sequences() {
        let (mut session, item_id) = session_with("Nachos", 30.0, 2);
        let a = session.people().people()[0].id;
        let b = session.people().people()[1].id;

        for person_ids in [vec![a], vec![b], vec![a, b]] {
            let _ = session.split_item(SplitRequest {
                item_id,
                quantity: 1,
                person_ids,
            });
            assert!(session.unclaimed_quantity(item_id).unwrap() <= 2);
        }

        // Two commits of one unit each exhausted the item; the third was
        // rejected without mutating the ledger.
        assert_eq!(session.unclaimed_quantity(item_id).unwrap(), 0);
        assert_eq!(session.ledger().assignments().len(), 2);
    }

    #[test]
    fn test_from_extraction_builds_a_working_session() {
        let raw = r#"{"items":[{"name":"Burger","price":100.0,"quantity":2}],"total":200.0}"#;
        let extraction: ExtractionResult = serde_json::from_str(raw).unwrap();

        let session = SplitSession::from_extraction(&extraction).unwrap();
        assert_eq!(session.items().len(), 1);
        assert_eq!(session.people().len(), 2);
        assert_eq!(session.summary().totals.bill_total, 200.0);
    }
}
