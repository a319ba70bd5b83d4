use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{people::entities::Person, split::entities::Assignment};

/// Outcome of a person removal: the removed person plus the ids of every
/// assignment the cascade dropped, so callers can reconcile cached views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonRemoval {
    pub person: Person,
    pub invalidated_assignments: Vec<Uuid>,
}

/// The finalized `(assignments, people)` pair handed to the downstream
/// collaborator verbatim. The only artifact the core exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionSnapshot {
    pub assignments: Vec<Assignment>,
    pub people: Vec<Person>,
}
