use clientbook_core::{Person, PersonValidationError, Reminder};

fn alice() -> Person {
    Person::new("Alice Pauline", "94351253", "alice@example.com").unwrap()
}

#[test]
fn new_rejects_blank_names() {
    let err = Person::new("", "94351253", "a@example.com").unwrap_err();
    assert_eq!(err, PersonValidationError::BlankName);

    let err = Person::new("  ", "94351253", "a@example.com").unwrap_err();
    assert_eq!(err, PersonValidationError::BlankName);
}

#[test]
fn new_persons_start_active_with_no_reminders() {
    let person = alice();
    assert!(!person.is_archived());
    assert!(person.reminders().is_empty());
}

#[test]
fn identity_equality_is_weaker_than_full_equality() {
    let a = alice();
    let same_identity = Person::new("alice pauline", "00000000", "other@example.com").unwrap();
    let different = Person::new("Benson Meier", "94351253", "alice@example.com").unwrap();

    assert!(a.is_same_person(&same_identity));
    assert_ne!(a, same_identity);
    assert!(!a.is_same_person(&different));

    let mut archived_twin = a.clone();
    archived_twin.archive();
    // Archive state breaks full equality but not identity.
    assert!(a.is_same_person(&archived_twin));
    assert_ne!(a, archived_twin);
}

#[test]
fn archive_and_unarchive_flip_the_flag_in_place() {
    let mut person = alice();

    person.archive();
    assert!(person.is_archived());

    person.unarchive();
    assert!(!person.is_archived());
}

#[test]
fn reminders_keep_insertion_order() {
    let mut person = alice();
    let later = Reminder::new("pay rent", "2025-03-01 08:00").unwrap();
    let earlier = Reminder::new("call back", "2025-01-15 18:30").unwrap();

    person.add_reminder(later.clone());
    person.add_reminder(earlier.clone());

    assert_eq!(person.reminders(), &[later, earlier]);
}

#[test]
fn has_reminder_matches_case_insensitive_duplicates() {
    let mut person = alice();
    person.add_reminder(Reminder::new("Call", "2025-01-01 10:00").unwrap());

    let near_duplicate = Reminder::new("call", "2025-01-01 10:00").unwrap();
    assert!(person.has_reminder(&near_duplicate));

    let different_date = Reminder::new("Call", "2025-01-02 10:00").unwrap();
    assert!(!person.has_reminder(&different_date));
}

#[test]
fn remove_reminder_removes_first_match_only() {
    let mut person = alice();
    let reminder = Reminder::new("Call", "2025-01-01 10:00").unwrap();
    person.add_reminder(reminder.clone());
    person.add_reminder(Reminder::new("call", "2025-01-01 10:00").unwrap());

    assert!(person.remove_reminder(&reminder));
    assert_eq!(person.reminders().len(), 1);

    assert!(person.remove_reminder(&reminder));
    assert!(person.reminders().is_empty());

    assert!(!person.remove_reminder(&reminder));
}

#[test]
fn person_round_trips_through_json() {
    let mut person = alice();
    person.archive();
    person.add_reminder(Reminder::new("renew lease", "2025-09-30 12:00").unwrap());

    let json = serde_json::to_string(&person).unwrap();
    let decoded: Person = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, person);
}
