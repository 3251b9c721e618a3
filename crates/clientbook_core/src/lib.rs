//! Core model logic for Clientbook.
//! This crate is the single source of truth for address book invariants.

pub mod logging;
pub mod model;
pub mod prefs;
pub mod store;
pub mod view;

pub use logging::{init_logging, logging_status};
pub use model::person::{Person, PersonValidationError};
pub use model::reminder::{Reminder, ReminderValidationError, DEADLINE_INPUT_PATTERN};
pub use prefs::{GuiSettings, UserPrefs};
pub use store::address_book::{AddressBook, StoreError, StoreResult};
pub use view::model_manager::{
    show_active_persons, show_all_persons, show_archived_persons, ModelManager, PersonPredicate,
};
pub use view::reminder_sorter::{compare_general_reminders, sort_general_reminders};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
