//! Session error types.

use super::{Mark, Position};

/// Rejection of a session operation.
///
/// Every rejection leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// A player name was missing when starting a session.
    #[display("Please enter a name for player {}", _0)]
    InvalidConfiguration(Mark),

    /// Cell index outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The target cell already holds a marker.
    #[display("{} is already taken", _0)]
    CellOccupied(Position),

    /// The match reached a win or a tie.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// No players are seated yet.
    #[display("No game in progress; start one with two player names")]
    NoActiveSession,

    /// Players are already seated at this table.
    #[display("A game is already set up; return to player entry first")]
    AlreadySeated,

    /// An internal consistency check failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SessionError {}
