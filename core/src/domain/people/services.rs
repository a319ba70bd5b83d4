use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, policies::ensure},
    people::{entities::Person, value_objects::PERSON_PALETTE},
};

/// The registry never shrinks below this.
pub const MIN_PEOPLE: usize = 2;

/// Mutable set of split participants. Starts with two people and keeps a
/// monotonic counter so synthesized names stay unique across removals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonRegistry {
    people: Vec<Person>,
    next_seq: u32,
}

impl PersonRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            people: Vec::new(),
            next_seq: 1,
        };

        for _ in 0..MIN_PEOPLE {
            registry.add_person();
        }

        registry
    }

    /// Adds a person with a synthesized sequential name and the default tip
    /// rate. Never fails.
    pub fn add_person(&mut self) -> Person {
        let person = Person::new(format!("Person {}", self.next_seq));
        self.next_seq += 1;
        self.people.push(person.clone());

        person
    }

    /// Removes a person, keeping the floor of two participants. The caller
    /// is responsible for cascading assignment deletion.
    pub fn remove_person(&mut self, person_id: Uuid) -> Result<Person, CoreError> {
        let index = self.index_of(person_id)?;

        ensure(
            self.people.len() > MIN_PEOPLE,
            CoreError::CapacityExceeded(format!(
                "cannot remove below the minimum of {} people",
                MIN_PEOPLE
            )),
        )?;

        Ok(self.people.remove(index))
    }

    pub fn rename_person(&mut self, person_id: Uuid, name: String) -> Result<(), CoreError> {
        let index = self.index_of(person_id)?;
        let person = &mut self.people[index];
        person.name = name;
        person.updated_at = Utc::now();

        Ok(())
    }

    /// Sets a person's tip percentage. Negative and non-finite values are a
    /// caller error.
    pub fn set_tip(&mut self, person_id: Uuid, tip_percentage: f64) -> Result<(), CoreError> {
        ensure(
            tip_percentage.is_finite() && tip_percentage >= 0.0,
            CoreError::InvalidArgument(format!(
                "tip percentage must be a non-negative number, got {}",
                tip_percentage
            )),
        )?;

        let index = self.index_of(person_id)?;
        let person = &mut self.people[index];
        person.tip_percentage = tip_percentage;
        person.updated_at = Utc::now();

        Ok(())
    }

    /// Presentation color for a person: registry position modulo the
    /// palette length.
    pub fn color_for(&self, person_id: Uuid) -> Result<&'static str, CoreError> {
        let index = self.index_of(person_id)?;
        Ok(PERSON_PALETTE[index % PERSON_PALETTE.len()])
    }

    pub fn get(&self, person_id: Uuid) -> Result<&Person, CoreError> {
        let index = self.index_of(person_id)?;
        Ok(&self.people[index])
    }

    pub fn contains(&self, person_id: Uuid) -> bool {
        self.people.iter().any(|person| person.id == person_id)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    fn index_of(&self, person_id: Uuid) -> Result<usize, CoreError> {
        self.people
            .iter()
            .position(|person| person.id == person_id)
            .ok_or_else(|| CoreError::ReferenceNotFound(format!("person {}", person_id)))
    }
}

impl Default for PersonRegistry {
    fn default() -> Self {
        Self::new()
    }
}
