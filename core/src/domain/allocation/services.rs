use uuid::Uuid;

use crate::domain::{
    allocation::value_objects::{AllocationSummary, GroupTotals, ItemAllocation, PersonAllocation},
    bill::services::BillItemStore,
    common::entities::app_errors::CoreError,
    people::{services::PersonRegistry, value_objects::PERSON_PALETTE},
    split::services::AssignmentLedger,
};

/// Sum of frozen per-person prices over every assignment containing the
/// person. A person unknown to the registry may still be queried here; an
/// id that was cascaded away simply sums to zero.
pub fn person_subtotal(ledger: &AssignmentLedger, person_id: Uuid) -> f64 {
    ledger
        .assignments()
        .iter()
        .filter(|assignment| assignment.assigned_to.contains(&person_id))
        .map(|assignment| assignment.price_per_person)
        .sum()
}

/// Tip derived live from the current registry rate, unlike the frozen
/// assignment prices.
pub fn person_tip(
    ledger: &AssignmentLedger,
    people: &PersonRegistry,
    person_id: Uuid,
) -> Result<f64, CoreError> {
    let person = people.get(person_id)?;
    Ok(person_subtotal(ledger, person_id) * person.tip_percentage / 100.0)
}

pub fn person_total(
    ledger: &AssignmentLedger,
    people: &PersonRegistry,
    person_id: Uuid,
) -> Result<f64, CoreError> {
    Ok(person_subtotal(ledger, person_id) + person_tip(ledger, people, person_id)?)
}

/// Nominal total from the source receipt, independent of assignment state.
pub fn bill_total(items: &BillItemStore) -> f64 {
    items
        .items()
        .iter()
        .map(|item| item.unit_price * f64::from(item.quantity))
        .sum()
}

/// What has actually been allocated so far.
pub fn assigned_total(ledger: &AssignmentLedger) -> f64 {
    ledger
        .assignments()
        .iter()
        .map(|assignment| assignment.price_per_person * assignment.assigned_to.len() as f64)
        .sum()
}

pub fn tip_total(ledger: &AssignmentLedger, people: &PersonRegistry) -> f64 {
    people
        .people()
        .iter()
        .map(|person| person_subtotal(ledger, person.id) * person.tip_percentage / 100.0)
        .sum()
}

/// Σ person_total over all registered people; equals
/// `assigned_total + tip_total` by construction (reconciliation identity).
pub fn group_total(ledger: &AssignmentLedger, people: &PersonRegistry) -> f64 {
    people
        .people()
        .iter()
        .map(|person| {
            let subtotal = person_subtotal(ledger, person.id);
            subtotal + subtotal * person.tip_percentage / 100.0
        })
        .sum()
}

/// Full derived view for the results screen, re-computed on demand from the
/// three stores.
pub fn summarize(
    items: &BillItemStore,
    people: &PersonRegistry,
    ledger: &AssignmentLedger,
) -> AllocationSummary {
    let item_rows = items
        .items()
        .iter()
        .map(|item| {
            let assigned = ledger.assigned_quantity(item.id);
            ItemAllocation {
                item_id: item.id,
                name: item.name.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
                assigned_quantity: assigned,
                unclaimed_quantity: item.quantity.saturating_sub(assigned),
            }
        })
        .collect();

    let person_rows = people
        .people()
        .iter()
        .enumerate()
        .map(|(index, person)| {
            let subtotal = person_subtotal(ledger, person.id);
            let tip = subtotal * person.tip_percentage / 100.0;
            PersonAllocation {
                person_id: person.id,
                name: person.name.clone(),
                color: PERSON_PALETTE[index % PERSON_PALETTE.len()].to_string(),
                tip_percentage: person.tip_percentage,
                subtotal,
                tip,
                total: subtotal + tip,
            }
        })
        .collect();

    AllocationSummary {
        items: item_rows,
        people: person_rows,
        totals: GroupTotals {
            bill_total: bill_total(items),
            assigned_total: assigned_total(ledger),
            tip_total: tip_total(ledger, people),
            group_total: group_total(ledger, people),
        },
    }
}
