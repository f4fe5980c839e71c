//! Lock-guarded table for hosts with concurrent callers.

use super::{GameResult, GameSession, SessionError, Table};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, instrument};

/// Cloneable handle to one table; every operation holds the lock for its
/// whole duration.
#[derive(Debug, Clone, Default)]
pub struct SharedTable {
    inner: Arc<Mutex<Table>>,
}

impl SharedTable {
    /// Creates a table in player entry.
    pub fn new() -> Self {
        Self::default()
    }

    // Operations are all-or-nothing, so a poisoned table is still consistent.
    fn lock(&self) -> MutexGuard<'_, Table> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seats two players. See [`Table::start`].
    ///
    /// # Errors
    ///
    /// Same as [`Table::start`].
    #[instrument(skip(self))]
    pub fn start(&self, name_x: &str, name_o: &str) -> Result<GameSession, SessionError> {
        let mut table = self.lock();
        table.start(name_x, name_o).cloned()
    }

    /// Applies a move. See [`Table::apply_move`].
    ///
    /// # Errors
    ///
    /// Same as [`Table::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_move(&self, index: usize) -> Result<GameResult, SessionError> {
        let mut table = self.lock();
        let result = table.apply_move(index);
        debug!(?result, "Shared move handled");
        result
    }

    /// Resets the board, keeping players.
    ///
    /// # Errors
    ///
    /// Same as [`Table::reset`].
    #[instrument(skip(self))]
    pub fn reset(&self) -> Result<(), SessionError> {
        self.lock().reset()
    }

    /// Returns to player entry.
    #[instrument(skip(self))]
    pub fn full_reset(&self) {
        self.lock().full_reset();
    }

    /// Snapshot of the seated session.
    pub fn snapshot(&self) -> Option<GameSession> {
        self.lock().session().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_moves_are_serialized() {
        let table = SharedTable::new();
        table.start("Ann", "Bob").expect("valid names");

        let handles: Vec<_> = (0..9)
            .map(|index| {
                let table = table.clone();
                thread::spawn(move || table.apply_move(index))
            })
            .collect();
        let outcomes: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect();

        let session = table.snapshot().expect("seated");
        let accepted = outcomes.iter().filter(|r| r.is_ok()).count();
        assert_eq!(session.history().len(), accepted);
        assert_eq!(session.board().filled(), accepted);
        assert!(
            outcomes
                .iter()
                .all(|r| matches!(r, Ok(_) | Err(SessionError::GameAlreadyOver)))
        );
    }

    #[test]
    fn test_full_reset_requires_start() {
        let table = SharedTable::new();
        table.start("Ann", "Bob").expect("valid names");
        table.full_reset();
        assert_eq!(table.apply_move(0), Err(SessionError::NoActiveSession));
        assert!(table.snapshot().is_none());
    }
}
