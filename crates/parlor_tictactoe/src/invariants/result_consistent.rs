//! Result consistency invariant: the stored result is derived from the board.

use super::super::{GameSession, rules};
use super::Invariant;

/// Invariant: the board passes a strict audit and the stored result equals
/// the audited result.
pub struct ResultConsistentInvariant;

impl Invariant<GameSession> for ResultConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        rules::audit(session.board()).is_ok_and(|result| result == session.result())
    }

    fn description() -> &'static str {
        "Stored result matches a legal board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameResult, Mark, Position};

    #[test]
    fn test_tied_session_holds() {
        let session =
            GameSession::replay("Ann", "Bob", &[0, 2, 1, 3, 5, 4, 6, 7, 8]).expect("replay");
        assert_eq!(session.result(), GameResult::Tied);
        assert!(ResultConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_stale_result_violates() {
        let mut session = GameSession::replay("Ann", "Bob", &[0, 3, 1, 4, 2]).expect("replay");
        session.result = GameResult::InProgress;
        assert!(!ResultConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_double_winner_violates() {
        let mut session = GameSession::replay("Ann", "Bob", &[0, 3, 1, 4, 2]).expect("replay");
        session.board.set(Position::MiddleRight, Cell::Marked(Mark::O));
        session.board.set(Position::BottomLeft, Cell::Marked(Mark::X));
        assert!(!ResultConsistentInvariant::holds(&session));
    }
}
