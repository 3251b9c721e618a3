//! Total order for the global reminder feed.

use crate::model::person::Person;
use crate::model::reminder::Reminder;
use std::cmp::Ordering;

/// Compares feed entries by deadline ascending, breaking ties with the
/// case-sensitive header order. Total and deterministic, so any stable
/// sort may use it.
pub fn compare_general_reminders(
    a: &(Person, Reminder),
    b: &(Person, Reminder),
) -> Ordering {
    a.1.compare_deadline(&b.1).then_with(|| a.1.compare_header(&b.1))
}

/// Stable-sorts feed entries into the general reminder order.
pub fn sort_general_reminders(entries: &mut [(Person, Reminder)]) {
    entries.sort_by(compare_general_reminders);
}
