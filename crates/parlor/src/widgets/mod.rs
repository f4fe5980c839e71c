//! Small standalone apps reachable from the shell.

pub mod calculator;
pub mod calendar;
pub mod contacts;
pub mod dice;
pub mod reminders;
pub mod rps;
pub mod truth_or_dare;
pub mod typing;

pub use calculator::{CalcError, Operation, calculate};
pub use calendar::{CalendarError, render_year};
pub use contacts::{Contact, ContactBook, ContactError};
pub use dice::{DiceError, roll};
pub use reminders::{Reminder, ReminderBoard, ReminderError};
pub use rps::{Choice, Verdict, resolve};
pub use truth_or_dare::{Kind, draw};
pub use typing::{TypingError, TypingReport, TypingTest};
