//! Canonical person store.
//!
//! # Responsibility
//! - Own the single ordered sequence of persons.
//! - Enforce identity-uniqueness on every write path.
//! - Serve as the snapshot shape exchanged with the storage collaborator.
//!
//! # Invariants
//! - No two stored persons are identity-equal.
//! - Every failed mutation leaves the store byte-for-byte unchanged.
//! - Archived persons stay in the one canonical sequence; archive state is
//!   a flag, not a separate collection.

use crate::model::person::Person;
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Semantic error for store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The operation would leave two identity-equal persons in the store.
    DuplicatePerson,
    /// The targeted person is not in the referenced collection.
    PersonNotFound,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson => write!(f, "operation would result in duplicate persons"),
            Self::PersonNotFound => write!(f, "person not found in the address book"),
        }
    }
}

impl Error for StoreError {}

/// Ordered, identity-unique collection of persons. Doubles as the
/// read-only snapshot handed to and received from persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// All persons in store order, archived included.
    pub fn person_list(&self) -> &[Person] {
        &self.persons
    }

    /// Returns true when a stored person is identity-equal to `person`.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    /// Returns true when a stored person is archived and identity-equal to
    /// `person`. Used to reject operations that would create an archived
    /// duplicate.
    pub fn has_archived_person(&self, person: &Person) -> bool {
        self.persons
            .iter()
            .any(|p| p.is_archived() && p.is_same_person(person))
    }

    /// Appends a person.
    ///
    /// # Errors
    /// - `DuplicatePerson` when an identity-equal person already exists.
    pub fn add_person(&mut self, person: Person) -> StoreResult<()> {
        if self.has_person(&person) {
            return Err(StoreError::DuplicatePerson);
        }
        debug!("store: adding person `{person}`");
        self.persons.push(person);
        Ok(())
    }

    /// Removes the person identity-equal to `target`.
    ///
    /// # Errors
    /// - `PersonNotFound` when no stored person matches.
    pub fn remove_person(&mut self, target: &Person) -> StoreResult<()> {
        let index = self
            .position_of(target)
            .ok_or(StoreError::PersonNotFound)?;
        debug!("store: removing person `{target}`");
        self.persons.remove(index);
        Ok(())
    }

    /// Replaces `target` with `edited`, preserving its position.
    ///
    /// # Errors
    /// - `PersonNotFound` when `target` is absent.
    /// - `DuplicatePerson` when `edited` is identity-equal to a different
    ///   existing entry.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> StoreResult<()> {
        let index = self
            .position_of(target)
            .ok_or(StoreError::PersonNotFound)?;
        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && p.is_same_person(&edited));
        if collides {
            return Err(StoreError::DuplicatePerson);
        }
        self.persons[index] = edited;
        Ok(())
    }

    /// Stable in-place reorder under the given comparator.
    pub fn sort_persons<F>(&mut self, compare: F)
    where
        F: FnMut(&Person, &Person) -> Ordering,
    {
        self.persons.sort_by(compare);
    }

    /// Archived persons in store order.
    pub fn archived_person_list(&self) -> Vec<&Person> {
        self.persons.iter().filter(|p| p.is_archived()).collect()
    }

    /// Flips the archived flag on for the person identity-equal to `person`.
    ///
    /// # Errors
    /// - `PersonNotFound` when no stored person matches.
    pub fn archive_person(&mut self, person: &Person) -> StoreResult<()> {
        let index = self
            .position_of(person)
            .ok_or(StoreError::PersonNotFound)?;
        self.persons[index].archive();
        Ok(())
    }

    /// Flips the archived flag off for the archived person identity-equal
    /// to `person`.
    ///
    /// # Errors
    /// - `PersonNotFound` when `person` is not among the archived entries.
    pub fn unarchive_person(&mut self, person: &Person) -> StoreResult<()> {
        let index = self
            .persons
            .iter()
            .position(|p| p.is_archived() && p.is_same_person(person))
            .ok_or(StoreError::PersonNotFound)?;
        self.persons[index].unarchive();
        Ok(())
    }

    /// Replaces all contents with the given snapshot.
    pub fn reset_data(&mut self, snapshot: AddressBook) {
        self.persons = snapshot.persons;
    }

    fn position_of(&self, person: &Person) -> Option<usize> {
        self.persons.iter().position(|p| p.is_same_person(person))
    }
}
