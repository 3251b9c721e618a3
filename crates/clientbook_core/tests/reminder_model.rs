use clientbook_core::{Reminder, ReminderValidationError};
use std::cmp::Ordering;

#[test]
fn new_round_trips_deadline_text() {
    let reminder = Reminder::new("Call landlord", "2025-06-07 09:30").unwrap();

    assert_eq!(reminder.header(), "Call landlord");
    assert_eq!(reminder.deadline_text(), "2025-06-07 09:30");
    assert_eq!(reminder.to_string(), "Call landlord, due by 2025-06-07 09:30");
}

#[test]
fn new_rejects_blank_headers() {
    let err = Reminder::new("", "2025-06-07 09:30").unwrap_err();
    assert_eq!(err, ReminderValidationError::BlankHeader);

    let err = Reminder::new("   ", "2025-06-07 09:30").unwrap_err();
    assert_eq!(err, ReminderValidationError::BlankHeader);

    let err = Reminder::new(" leading space", "2025-06-07 09:30").unwrap_err();
    assert_eq!(err, ReminderValidationError::BlankHeader);
}

#[test]
fn new_rejects_pattern_mismatches() {
    for text in [
        "2025-6-07 09:30",
        "2025/06/07 09:30",
        "2025-06-07",
        "2025-06-07T09:30",
        "2025-13-01 09:30",
        "tomorrow",
        "",
    ] {
        let err = Reminder::new("Call", text).unwrap_err();
        assert_eq!(
            err,
            ReminderValidationError::DeadlineFormat(text.to_string()),
            "`{text}` should fail the format check"
        );
    }
}

#[test]
fn new_rejects_calendar_invalid_deadlines() {
    for text in [
        "2024-02-30 10:00",
        "2023-02-29 10:00",
        "2025-04-31 10:00",
        "2025-06-00 10:00",
        "2025-06-07 24:00",
        "2025-06-07 09:60",
    ] {
        let err = Reminder::new("Call", text).unwrap_err();
        assert_eq!(
            err,
            ReminderValidationError::DeadlineInvalid(text.to_string()),
            "`{text}` should fail strict calendar resolution"
        );
    }
}

#[test]
fn leap_day_is_valid_in_leap_years() {
    let reminder = Reminder::new("Birthday", "2024-02-29 08:00").unwrap();
    assert_eq!(reminder.deadline_text(), "2024-02-29 08:00");
}

#[test]
fn equality_ignores_header_case_but_not_deadline() {
    let a = Reminder::new("Call", "2025-01-01 10:00").unwrap();
    let b = Reminder::new("call", "2025-01-01 10:00").unwrap();
    let c = Reminder::new("Call", "2025-01-01 10:01").unwrap();
    let d = Reminder::new("Email", "2025-01-01 10:00").unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, d);
}

#[test]
fn compare_deadline_is_chronological() {
    let earlier = Reminder::new("a", "2025-01-01 09:59").unwrap();
    let later = Reminder::new("a", "2025-01-01 10:00").unwrap();

    assert_eq!(earlier.compare_deadline(&later), Ordering::Less);
    assert_eq!(later.compare_deadline(&earlier), Ordering::Greater);
    assert_eq!(earlier.compare_deadline(&earlier), Ordering::Equal);
}

#[test]
fn compare_header_is_case_sensitive() {
    let upper = Reminder::new("Call", "2025-01-01 10:00").unwrap();
    let lower = Reminder::new("call", "2025-01-01 10:00").unwrap();

    assert_eq!(upper.compare_header(&lower), Ordering::Less);
}

#[test]
fn serialization_uses_deadline_text_and_revalidates_on_load() {
    let reminder = Reminder::new("Pay rent", "2025-03-01 08:00").unwrap();

    let json = serde_json::to_value(&reminder).unwrap();
    assert_eq!(json["header"], "Pay rent");
    assert_eq!(json["deadline"], "2025-03-01 08:00");

    let decoded: Reminder = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, reminder);

    let bad = serde_json::json!({ "header": "Pay rent", "deadline": "2025-02-30 08:00" });
    let err = serde_json::from_value::<Reminder>(bad).unwrap_err();
    assert!(
        err.to_string().contains("invalid date or time"),
        "unexpected error: {err}"
    );
}
