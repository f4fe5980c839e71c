//! In-memory reminder list.

use chrono::{DateTime, NaiveDateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Display format for reminder times.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// A message due at a moment in UTC.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Reminder {
    message: String,
    when: DateTime<Utc>,
}

impl Reminder {
    /// Whether the reminder time has been reached.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.when <= now
    }
}

impl std::fmt::Display for Reminder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.when.format(TIME_FORMAT))
    }
}

/// Reminder list failure.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ReminderError {
    /// The message was blank.
    #[display("Please enter a reminder message.")]
    EmptyMessage,

    /// Time text did not match `YYYY-MM-DD HH:MM[:SS]`.
    #[display("Invalid reminder time '{}' (expected YYYY-MM-DD HH:MM)", input)]
    InvalidTime {
        /// The rejected text.
        input: String,
    },

    /// No reminder at this index.
    #[display("No reminder #{} (have {}).", index, len)]
    NotFound {
        /// Requested index.
        index: usize,
        /// Number of reminders.
        len: usize,
    },
}

/// Parses `YYYY-MM-DD HH:MM` or `YYYY-MM-DD HH:MM:SS` as UTC.
///
/// # Errors
///
/// Returns [`ReminderError::InvalidTime`] for any other text.
#[instrument]
pub fn parse_time(input: &str) -> Result<DateTime<Utc>, ReminderError> {
    let trimmed = input.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ReminderError::InvalidTime {
            input: input.to_string(),
        })
}

/// Reminders in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderBoard {
    reminders: Vec<Reminder>,
}

impl ReminderBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a reminder.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::EmptyMessage`] for a blank message.
    #[instrument(skip(self))]
    pub fn add(&mut self, message: &str, when: DateTime<Utc>) -> Result<&Reminder, ReminderError> {
        let message = message.trim();
        if message.is_empty() {
            warn!("Reminder message missing");
            return Err(ReminderError::EmptyMessage);
        }

        let index = self.reminders.len();
        self.reminders.push(Reminder::new(message.to_string(), when));
        info!(index, when = %when.format(TIME_FORMAT), "Reminder set");
        Ok(&self.reminders[index])
    }

    /// Removes the reminder at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::NotFound`] and changes nothing when the index
    /// does not exist.
    #[instrument(skip(self))]
    pub fn delete(&mut self, index: usize) -> Result<Reminder, ReminderError> {
        if index >= self.reminders.len() {
            debug!(index, len = self.reminders.len(), "Reminder index out of range");
            return Err(ReminderError::NotFound {
                index,
                len: self.reminders.len(),
            });
        }
        info!(index, "Reminder deleted");
        Ok(self.reminders.remove(index))
    }

    /// All reminders in insertion order.
    pub fn list(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Reminders whose time has been reached, with their indices.
    #[instrument(skip(self))]
    pub fn due(&self, now: DateTime<Utc>) -> Vec<(usize, &Reminder)> {
        self.reminders
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_due(now))
            .collect()
    }

    /// Number of reminders.
    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    /// Whether the board is empty.
    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, h, m, 0)
            .single()
            .expect("valid time")
    }

    #[test]
    fn test_add_list_delete() {
        let mut board = ReminderBoard::new();
        board.add("Stand-up", at(9, 30)).expect("valid");
        board.add("Lunch", at(12, 0)).expect("valid");

        assert_eq!(board.len(), 2);
        let removed = board.delete(0).expect("exists");
        assert_eq!(removed.message(), "Stand-up");
        assert_eq!(board.list()[0].message(), "Lunch");
        assert_eq!(
            board.delete(3),
            Err(ReminderError::NotFound { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_blank_message_rejected() {
        let mut board = ReminderBoard::new();
        assert_eq!(board.add("  ", at(9, 0)), Err(ReminderError::EmptyMessage));
        assert!(board.is_empty());
    }

    #[test]
    fn test_due_includes_exact_time() {
        let mut board = ReminderBoard::new();
        board.add("early", at(8, 0)).expect("valid");
        board.add("late", at(18, 0)).expect("valid");
        board.add("now", at(12, 0)).expect("valid");

        let due: Vec<_> = board.due(at(12, 0)).into_iter().map(|(i, _)| i).collect();
        assert_eq!(due, [0, 2]);
    }

    #[test]
    fn test_parse_time_formats() {
        assert_eq!(parse_time("2026-03-14 09:30"), Ok(at(9, 30)));
        assert_eq!(parse_time(" 2026-03-14 12:00:00 "), Ok(at(12, 0)));
        assert!(matches!(
            parse_time("tomorrow"),
            Err(ReminderError::InvalidTime { .. })
        ));
    }

    #[test]
    fn test_display_format() {
        let reminder = Reminder::new("Call".to_string(), at(9, 5));
        assert_eq!(reminder.to_string(), "Call (2026-03-14 09:05:00)");
    }
}
