//! Derived views over the canonical store.
//!
//! # Responsibility
//! - Recompute filtered person projections on explicit refresh calls.
//! - Keep the cross-person reminder feed in its total order.
//!
//! # Invariants
//! - Views are recomputed, never reactively pushed; a projection shows the
//!   store as of the last refresh.

pub mod model_manager;
pub mod reminder_sorter;
