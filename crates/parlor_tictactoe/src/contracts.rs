//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, action)} action {Q(before, after)}.

use super::invariants::{InvariantSet, SessionInvariants};
use super::{Cell, GameSession, Position, SessionError};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// What a satisfied precondition hands to the transition.
    type Accepted;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Accepted, SessionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), SessionError>;
}

/// Precondition: the game has not reached a terminal result.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `GameAlreadyOver` on a won or tied session.
    pub fn check(session: &GameSession) -> Result<(), SessionError> {
        if session.is_over() {
            Err(SessionError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index names a cell.
pub struct IndexOnBoard;

impl IndexOnBoard {
    /// Converts the index, failing with `OutOfRange`.
    pub fn check(index: usize) -> Result<Position, SessionError> {
        Position::from_index(index).ok_or(SessionError::OutOfRange(index))
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `CellOccupied` when the cell holds a marker.
    pub fn check(session: &GameSession, position: Position) -> Result<(), SessionError> {
        if session.board().is_empty(position) {
            Ok(())
        } else {
            Err(SessionError::CellOccupied(position))
        }
    }
}

/// Contract for placing the current marker by cell index.
///
/// Preconditions, in order:
/// - game not over
/// - index in 0-8
/// - cell empty
///
/// Postconditions:
/// - exactly one cell went from empty to the mover's marker
/// - the turn flipped unless the move ended the game
/// - session invariants hold
pub struct MoveContract;

impl Contract<GameSession, usize> for MoveContract {
    type Accepted = Position;

    fn pre(session: &GameSession, index: &usize) -> Result<Position, SessionError> {
        GameNotOver::check(session)?;
        let position = IndexOnBoard::check(*index)?;
        CellIsEmpty::check(session, position)?;
        Ok(position)
    }

    #[instrument(skip_all)]
    fn post(before: &GameSession, after: &GameSession) -> Result<(), SessionError> {
        let changed: Vec<(Cell, Cell)> = before
            .board()
            .cells()
            .iter()
            .zip(after.board().cells())
            .filter(|(b, a)| b != a)
            .map(|(b, a)| (*b, *a))
            .collect();
        let mover = before.turn();
        if changed != [(Cell::Empty, Cell::Marked(mover))] {
            warn!(?changed, "Move changed the wrong cells");
            return Err(SessionError::InvariantViolation(format!(
                "expected one empty cell to become {}, got {:?}",
                mover, changed
            )));
        }

        let expected_turn = if after.is_over() {
            mover
        } else {
            mover.opponent()
        };
        if after.turn() != expected_turn {
            return Err(SessionError::InvariantViolation(format!(
                "turn should be {} after {}'s move",
                expected_turn, mover
            )));
        }

        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            SessionError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    fn started() -> GameSession {
        GameSession::start("Ann", "Bob").expect("valid names")
    }

    #[test]
    fn test_precondition_order() {
        let over = GameSession::replay("Ann", "Bob", &[0, 3, 1, 4, 2]).expect("replay");
        assert_eq!(MoveContract::pre(&over, &99), Err(SessionError::GameAlreadyOver));

        let session = started();
        assert_eq!(MoveContract::pre(&session, &9), Err(SessionError::OutOfRange(9)));
        assert_eq!(MoveContract::pre(&session, &8), Ok(Position::BottomRight));
    }

    #[test]
    fn test_precondition_occupied() {
        let mut session = started();
        session.apply_move(4).expect("legal move");
        assert_eq!(
            MoveContract::pre(&session, &4),
            Err(SessionError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = started();
        let mut after = before.clone();
        after.apply_move(4).expect("legal move");
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_extra_cell() {
        let before = started();
        let mut after = before.clone();
        after.apply_move(4).expect("legal move");
        after.board.set(Position::TopLeft, Cell::Marked(Mark::O));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(SessionError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_stuck_turn() {
        let before = started();
        let mut after = before.clone();
        after.apply_move(4).expect("legal move");
        after.turn = Mark::X;
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
