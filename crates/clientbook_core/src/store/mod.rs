//! Canonical entity storage.
//!
//! # Responsibility
//! - Keep the authoritative person sequence behind identity-uniqueness
//!   checks.
//!
//! # Invariants
//! - Store mutations return semantic errors (`DuplicatePerson`,
//!   `PersonNotFound`) instead of silently degrading the collection.

pub mod address_book;
