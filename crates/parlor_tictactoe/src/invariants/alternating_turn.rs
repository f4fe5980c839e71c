//! Alternating turn invariant: X, O, X, O, ...

use super::super::{GameSession, Mark};
use super::Invariant;

/// Invariant: markers alternate starting with X, and the turn marker agrees
/// with the history.
///
/// While in progress the turn belongs to whoever did not make the last move;
/// once the game is over it stays with the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mv)| mv.mark == if i % 2 == 0 { Mark::X } else { Mark::O });
        if !alternates {
            return false;
        }

        let expected = match history.last() {
            None => Mark::X,
            Some(last) if session.is_over() => last.mark,
            Some(last) => last.mark.opponent(),
        };
        session.turn() == expected
    }

    fn description() -> &'static str {
        "Markers alternate X, O, X, ... and the turn follows the last move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_new_session_holds() {
        let session = GameSession::start("Ann", "Bob").expect("valid names");
        assert!(AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_finished_session_holds() {
        let session = GameSession::replay("Ann", "Bob", &[0, 3, 1, 4, 2]).expect("replay");
        assert!(session.is_over());
        assert!(AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_same_marker_twice_violates() {
        let mut session = GameSession::replay("Ann", "Bob", &[0, 4]).expect("replay");
        if let Some(last) = session.history.last_mut() {
            *last = Move::new(Mark::X, last.position);
        }
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
