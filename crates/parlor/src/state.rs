//! State owned by one parlor session.

use crate::config::ParlorConfig;
use crate::widgets::{ContactBook, ReminderBoard, TypingTest};
use chrono::{DateTime, Utc};
use parlor_tictactoe::Table;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Everything the shell mutates: widget data, the tic-tac-toe table and the
/// random source.
#[derive(Debug)]
pub struct Parlor {
    config: ParlorConfig,
    contacts: ContactBook,
    reminders: ReminderBoard,
    table: Table,
    typing: Option<TypingTest>,
    rng: StdRng,
}

impl Parlor {
    /// Creates empty state, seeding the RNG from config when a seed is set.
    #[instrument(skip(config), fields(seed = ?config.rng_seed()))]
    pub fn new(config: ParlorConfig) -> Self {
        let rng = match config.rng_seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        debug!("Parlor state created");
        Self {
            config,
            contacts: ContactBook::new(),
            reminders: ReminderBoard::new(),
            table: Table::new(),
            typing: None,
            rng,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &ParlorConfig {
        &self.config
    }

    /// Contact book.
    pub fn contacts(&self) -> &ContactBook {
        &self.contacts
    }

    /// Mutable contact book.
    pub fn contacts_mut(&mut self) -> &mut ContactBook {
        &mut self.contacts
    }

    /// Reminder list.
    pub fn reminders(&self) -> &ReminderBoard {
        &self.reminders
    }

    /// Mutable reminder list.
    pub fn reminders_mut(&mut self) -> &mut ReminderBoard {
        &mut self.reminders
    }

    /// Tic-tac-toe table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Mutable tic-tac-toe table.
    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    /// Running typing test, if any.
    pub fn typing(&self) -> Option<&TypingTest> {
        self.typing.as_ref()
    }

    /// Random source.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Starts a typing test on a randomly chosen sample text.
    pub fn start_typing(&mut self, now: DateTime<Utc>) -> &TypingTest {
        let samples: Vec<&String> = self
            .config
            .sample_texts()
            .iter()
            .filter(|t| !t.trim().is_empty())
            .collect();
        let text = if samples.is_empty() {
            crate::widgets::typing::DEFAULT_SAMPLE_TEXT.to_string()
        } else {
            samples[self.rng.gen_range(0..samples.len())].trim().to_string()
        };
        let limit = *self.config.typing_time_limit_secs();
        self.typing.insert(TypingTest::start(text, now, limit))
    }

    /// Ends the running typing test, returning it.
    pub fn take_typing(&mut self) -> Option<TypingTest> {
        self.typing.take()
    }
}
