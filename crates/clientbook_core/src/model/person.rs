//! Person domain model.
//!
//! # Responsibility
//! - Hold identity/contact fields, the archived flag and the ordered
//!   reminder list for one person.
//! - Distinguish identity equality ("same real-world person") from full
//!   value equality.
//!
//! # Invariants
//! - `name` is non-blank.
//! - Archiving never removes a person; it only flips `archived` in place.
//! - Edits happen by replacement: callers build a new `Person` and swap it
//!   into the store, they do not mutate identity fields of a live entry.

use crate::model::reminder::{is_valid_header, Reminder};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Construction-time validation failure for person input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    /// Name is empty or starts with whitespace.
    BlankName,
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "person name cannot be blank"),
        }
    }
}

impl Error for PersonValidationError {}

/// One contact in the address book.
///
/// Full equality (`PartialEq`) covers every field including archive state
/// and reminders; [`Person::is_same_person`] is the weaker identity
/// relation used for duplicate detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    phone: String,
    email: String,
    archived: bool,
    reminders: Vec<Reminder>,
}

impl Person {
    /// Creates an active person with no reminders.
    ///
    /// # Errors
    /// - `BlankName` when `name` fails the non-blank pattern.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, PersonValidationError> {
        let name = name.into();
        if !is_valid_header(&name) {
            return Err(PersonValidationError::BlankName);
        }
        Ok(Self {
            name,
            phone: phone.into(),
            email: email.into(),
            archived: false,
            reminders: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_archived(&self) -> bool {
        self.archived
    }

    /// Identity equality: same real-world person despite differing mutable
    /// fields. Matches on name, ignoring case.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }

    pub fn archive(&mut self) {
        self.archived = true;
    }

    pub fn unarchive(&mut self) {
        self.archived = false;
    }

    /// Reminders in insertion order.
    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Returns true when an equal reminder (case-insensitive header, exact
    /// deadline) already exists on this person.
    pub fn has_reminder(&self, reminder: &Reminder) -> bool {
        self.reminders.contains(reminder)
    }

    /// Appends a reminder. Duplicate rejection is the calling layer's
    /// decision; the model only reports equality via [`Person::has_reminder`].
    pub fn add_reminder(&mut self, reminder: Reminder) {
        self.reminders.push(reminder);
    }

    /// Removes the first reminder equal to `reminder`; returns whether one
    /// was removed.
    pub fn remove_reminder(&mut self, reminder: &Reminder) -> bool {
        match self.reminders.iter().position(|r| r == reminder) {
            Some(index) => {
                self.reminders.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
