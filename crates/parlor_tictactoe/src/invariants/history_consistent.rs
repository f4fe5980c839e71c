//! History consistency invariant: the board is exactly the replayed history.

use super::super::{Cell, GameSession};
use super::Invariant;
use std::collections::HashSet;

/// Invariant: each recorded move's cell holds that move's marker, no cell is
/// recorded twice, and no other cell is marked.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let history = session.history();

        let distinct: HashSet<_> = history.iter().map(|mv| mv.position).collect();
        distinct.len() == history.len()
            && history
                .iter()
                .all(|mv| board.get(mv.position) == Cell::Marked(mv.mark))
            && board.filled() == history.len()
    }

    fn description() -> &'static str {
        "Board marks match the move history exactly"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_replayed_session_holds() {
        let session = GameSession::replay("Ann", "Bob", &[4, 0, 8]).expect("replay");
        assert!(HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let mut session = GameSession::replay("Ann", "Bob", &[4]).expect("replay");
        session.board.set(Position::BottomLeft, Cell::Marked(Mark::O));
        assert!(!HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_cleared_cell_violates() {
        let mut session = GameSession::replay("Ann", "Bob", &[4, 0]).expect("replay");
        session.board.set(Position::TopLeft, Cell::Empty);
        assert!(!HistoryConsistentInvariant::holds(&session));
    }
}
