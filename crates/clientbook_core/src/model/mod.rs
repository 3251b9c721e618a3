//! Domain model for the address book core.
//!
//! # Responsibility
//! - Define the validated value types shared by the store and the derived
//!   views.
//!
//! # Invariants
//! - Model values are never constructed in an invalid state; all text
//!   validation happens in the constructors.

pub mod person;
pub mod reminder;
