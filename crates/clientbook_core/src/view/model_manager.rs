//! In-memory model facade and derived views.
//!
//! # Responsibility
//! - Own the canonical address book and user preferences exclusively.
//! - Maintain the filtered person projections and the global reminder feed.
//! - Offer the mutation entry points the command layer calls into.
//!
//! # Invariants
//! - Projections are pull-based: they reflect the store as of the last
//!   explicit update/refresh call, never continuously.
//! - The reminder feed is seeded once at construction from the initial
//!   active view; afterwards only `add_general_reminder` and
//!   `delete_general_reminder` touch it.
//! - No caller writes into a projection directly; read accessors hand out
//!   shared slices only.

use crate::model::person::Person;
use crate::model::reminder::Reminder;
use crate::prefs::{GuiSettings, UserPrefs};
use crate::store::address_book::{AddressBook, StoreResult};
use crate::view::reminder_sorter::sort_general_reminders;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Person filter installed into the active view.
pub type PersonPredicate = Box<dyn Fn(&Person) -> bool>;

/// Predicate showing every person, archived included.
pub fn show_all_persons() -> PersonPredicate {
    Box::new(|_| true)
}

/// Predicate matching the built-in active view.
pub fn show_active_persons() -> PersonPredicate {
    Box::new(|p| !p.is_archived())
}

/// Predicate matching the built-in archived view.
pub fn show_archived_persons() -> PersonPredicate {
    Box::new(|p| p.is_archived())
}

/// The in-memory model of the address book data.
pub struct ModelManager {
    address_book: AddressBook,
    user_prefs: UserPrefs,
    filtered_persons: Vec<Person>,
    archived_persons: Vec<Person>,
    general_reminders: Vec<(Person, Reminder)>,
    viewing_archived_list: bool,
    current_filter: PersonPredicate,
}

impl ModelManager {
    /// Initializes the model with the given address book and user prefs.
    ///
    /// Installs the active-person filter, computes both projections, then
    /// seeds the reminder feed with one entry per reminder across the
    /// persons visible in the initial active view.
    pub fn new(address_book: AddressBook, user_prefs: UserPrefs) -> Self {
        debug!(
            "initializing model with {} person(s)",
            address_book.person_list().len()
        );
        let mut manager = Self {
            address_book,
            user_prefs,
            filtered_persons: Vec::new(),
            archived_persons: Vec::new(),
            general_reminders: Vec::new(),
            viewing_archived_list: false,
            current_filter: show_active_persons(),
        };
        manager.recompute_views();
        for person in &manager.filtered_persons {
            for reminder in person.reminders() {
                manager
                    .general_reminders
                    .push((person.clone(), reminder.clone()));
            }
        }
        sort_general_reminders(&mut manager.general_reminders);
        manager
    }

    //=========== UserPrefs ===============================================

    pub fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    pub fn set_user_prefs(&mut self, user_prefs: UserPrefs) {
        self.user_prefs.reset_data(user_prefs);
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        self.user_prefs.gui_settings()
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.user_prefs.set_gui_settings(gui_settings);
    }

    pub fn address_book_file_path(&self) -> &Path {
        self.user_prefs.address_book_file_path()
    }

    pub fn set_address_book_file_path(&mut self, path: PathBuf) {
        self.user_prefs.set_address_book_file_path(path);
    }

    //=========== AddressBook =============================================

    /// Snapshot handed to the storage collaborator on save.
    pub fn get_address_book(&self) -> &AddressBook {
        &self.address_book
    }

    /// Replaces all model data with the given snapshot and recomputes the
    /// person projections under the current filter. The reminder feed is
    /// deliberately left untouched; it is only seeded at construction.
    pub fn set_address_book(&mut self, snapshot: AddressBook) {
        self.address_book.reset_data(snapshot);
        self.recompute_views();
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    pub fn has_archived_person(&self, person: &Person) -> bool {
        self.address_book.has_archived_person(person)
    }

    /// Adds a person and refreshes the current built-in view.
    ///
    /// # Errors
    /// - `DuplicatePerson` when an identity-equal person already exists;
    ///   the store and projections are unchanged.
    pub fn add_person(&mut self, person: Person) -> StoreResult<()> {
        self.address_book.add_person(person)?;
        self.refresh_filtered_person_list();
        Ok(())
    }

    /// Removes a person by identity. Refresh is left to the caller.
    pub fn delete_person(&mut self, target: &Person) -> StoreResult<()> {
        self.address_book.remove_person(target)
    }

    /// Swaps `target` for `edited` in place. Refresh is left to the caller.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> StoreResult<()> {
        self.address_book.set_person(target, edited)
    }

    /// Stable-sorts the canonical store. Refresh is left to the caller.
    pub fn sort_persons<F>(&mut self, compare: F)
    where
        F: FnMut(&Person, &Person) -> std::cmp::Ordering,
    {
        self.address_book.sort_persons(compare);
    }

    /// Archives the person identity-equal to `person`. Refresh is left to
    /// the caller.
    pub fn archive_person(&mut self, person: &Person) -> StoreResult<()> {
        self.address_book.archive_person(person)
    }

    /// Unarchives the person identity-equal to `person`.
    ///
    /// # Errors
    /// - `PersonNotFound` when `person` is not among the archived entries.
    pub fn unarchive_person(&mut self, person: &Person) -> StoreResult<()> {
        self.address_book.unarchive_person(person)
    }

    //=========== Derived views ===========================================

    /// The active projection as of the last update/refresh call.
    pub fn filtered_person_list(&self) -> &[Person] {
        &self.filtered_persons
    }

    /// The archived projection as of the last update/refresh call.
    pub fn archived_person_list(&self) -> &[Person] {
        &self.archived_persons
    }

    /// The global reminder feed, sorted by deadline then header.
    pub fn general_reminder_list(&self) -> &[(Person, Reminder)] {
        &self.general_reminders
    }

    /// Installs `predicate` as the current filter and re-evaluates both
    /// projections over the full store. Idempotent for an equivalent
    /// predicate.
    pub fn update_filtered_person_list(&mut self, predicate: PersonPredicate) {
        self.current_filter = predicate;
        self.recompute_views();
    }

    /// Re-applies the built-in predicate chosen by the archived-list
    /// toggle. Callers of mutating operations invoke this to bring the
    /// visible list back in line with the store.
    pub fn refresh_filtered_person_list(&mut self) {
        if self.viewing_archived_list {
            self.update_filtered_person_list(show_archived_persons());
        } else {
            self.update_filtered_person_list(show_active_persons());
        }
    }

    pub fn is_viewing_archived_list(&self) -> bool {
        self.viewing_archived_list
    }

    /// Chooses which built-in predicate refresh uses. Does not itself
    /// refresh.
    pub fn set_viewing_archived_list(&mut self, viewing: bool) {
        self.viewing_archived_list = viewing;
    }

    /// Applies the current filter to one person, for callers that need to
    /// test visibility without touching the projections.
    pub fn matches_current_filter(&self, person: &Person) -> bool {
        (self.current_filter)(person)
    }

    //=========== Reminder feed ===========================================

    /// Appends a feed entry and re-sorts the whole feed. Full re-sort per
    /// insert is O(n log n) but n stays small in a personal address book.
    pub fn add_general_reminder(&mut self, person: &Person, reminder: &Reminder) {
        self.general_reminders
            .push((person.clone(), reminder.clone()));
        sort_general_reminders(&mut self.general_reminders);
        info!("reminder `{reminder}` for `{person}` added to general reminders");
    }

    /// Removes the first feed entry equal to `(person, reminder)` under
    /// value equality. A miss is a silent no-op; the feed never errors on
    /// deleting an absent pair.
    pub fn delete_general_reminder(&mut self, person: &Person, reminder: &Reminder) {
        let position = self
            .general_reminders
            .iter()
            .position(|(p, r)| p == person && r == reminder);
        if let Some(index) = position {
            self.general_reminders.remove(index);
            info!("reminder `{reminder}` for `{person}` deleted from general reminders");
        }
    }

    fn recompute_views(&mut self) {
        self.filtered_persons = self
            .address_book
            .person_list()
            .iter()
            .filter(|p| (self.current_filter)(p))
            .cloned()
            .collect();
        self.archived_persons = self
            .address_book
            .person_list()
            .iter()
            .filter(|p| p.is_archived())
            .cloned()
            .collect();
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(AddressBook::new(), UserPrefs::default())
    }
}
