//! Reminder domain model.
//!
//! # Responsibility
//! - Define the immutable dated note attached to a person.
//! - Validate header text and strictly parse the deadline at construction.
//!
//! # Invariants
//! - `header` is never blank once a `Reminder` exists.
//! - `deadline` always holds a calendar-valid timestamp; impossible dates
//!   (Feb 30, minute 60) are rejected before construction completes.
//! - Two reminders with case-differing headers on the same deadline compare
//!   equal, so near-duplicates cannot coexist on one person.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input and display pattern for deadlines, `YYYY-MM-DD HH:MM`.
pub const DEADLINE_INPUT_PATTERN: &str = "%Y-%m-%d %H:%M";

static HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S.*$").expect("valid header regex"));
static DEADLINE_FORMAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-\d{2} \d{2}:\d{2}$").expect("valid deadline regex")
});

/// Construction-time validation failure for reminder input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderValidationError {
    /// Header is empty or starts with whitespace.
    BlankHeader,
    /// Deadline text does not match the fixed-width input pattern.
    DeadlineFormat(String),
    /// Deadline text matches the pattern but is not a real date or time.
    DeadlineInvalid(String),
}

impl Display for ReminderValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankHeader => write!(f, "reminder header cannot be blank"),
            Self::DeadlineFormat(text) => {
                write!(f, "deadline `{text}` must be in the format yyyy-MM-dd HH:mm")
            }
            Self::DeadlineInvalid(text) => {
                write!(f, "deadline `{text}` is an invalid date or time")
            }
        }
    }
}

impl Error for ReminderValidationError {}

/// Serialized shape: the deadline travels as its input text so snapshots
/// stay human-readable and re-validate on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReminderWire {
    header: String,
    deadline: String,
}

/// Immutable dated note attached to one person.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ReminderWire", into = "ReminderWire")]
pub struct Reminder {
    header: String,
    deadline: NaiveDateTime,
}

impl Reminder {
    /// Constructs a reminder from raw header and deadline text.
    ///
    /// # Errors
    /// - `BlankHeader` when the header fails the non-blank pattern.
    /// - `DeadlineFormat` when the deadline text is not `YYYY-MM-DD HH:MM`.
    /// - `DeadlineInvalid` when the text parses to an impossible calendar
    ///   date or time.
    pub fn new(
        header: impl Into<String>,
        deadline_text: &str,
    ) -> Result<Self, ReminderValidationError> {
        let header = header.into();
        if !is_valid_header(&header) {
            return Err(ReminderValidationError::BlankHeader);
        }
        if !DEADLINE_FORMAT_RE.is_match(deadline_text) {
            return Err(ReminderValidationError::DeadlineFormat(
                deadline_text.to_string(),
            ));
        }
        let deadline = NaiveDateTime::parse_from_str(deadline_text, DEADLINE_INPUT_PATTERN)
            .map_err(|_| ReminderValidationError::DeadlineInvalid(deadline_text.to_string()))?;

        Ok(Self { header, deadline })
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn deadline(&self) -> NaiveDateTime {
        self.deadline
    }

    /// Deadline re-formatted through the input pattern; round-trips the
    /// text accepted by [`Reminder::new`].
    pub fn deadline_text(&self) -> String {
        self.deadline.format(DEADLINE_INPUT_PATTERN).to_string()
    }

    /// Chronological order; total because every reminder carries a deadline.
    pub fn compare_deadline(&self, other: &Reminder) -> Ordering {
        self.deadline.cmp(&other.deadline)
    }

    /// Case-sensitive lexicographic header order.
    pub fn compare_header(&self, other: &Reminder) -> Ordering {
        self.header.cmp(&other.header)
    }
}

/// Returns true when `header` is non-empty and does not start with
/// whitespace.
pub fn is_valid_header(header: &str) -> bool {
    HEADER_RE.is_match(header)
}

/// Case-insensitive header plus exact deadline. Keeps "Call" and "call" on
/// the same date from living as two reminders on one person.
impl PartialEq for Reminder {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline
            && self.header.to_lowercase() == other.header.to_lowercase()
    }
}

impl Eq for Reminder {}

impl Display for Reminder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, due by {}", self.header, self.deadline_text())
    }
}

impl TryFrom<ReminderWire> for Reminder {
    type Error = ReminderValidationError;

    fn try_from(wire: ReminderWire) -> Result<Self, Self::Error> {
        Reminder::new(wire.header, &wire.deadline)
    }
}

impl From<Reminder> for ReminderWire {
    fn from(reminder: Reminder) -> Self {
        Self {
            deadline: reminder.deadline_text(),
            header: reminder.header,
        }
    }
}
