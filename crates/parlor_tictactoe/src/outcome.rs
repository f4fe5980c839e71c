//! Match result derived from the board.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameResult {
    /// No line complete and at least one empty cell.
    #[default]
    InProgress,
    /// A line was completed by this marker.
    Won(Mark),
    /// Board full with no completed line.
    Tied,
}

impl GameResult {
    /// Returns the winning marker if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Won(mark) => Some(*mark),
            GameResult::InProgress | GameResult::Tied => None,
        }
    }

    /// Terminal results accept no further moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Won(mark) => write!(f, "{} wins", mark),
            GameResult::Tied => write!(f, "Tie"),
        }
    }
}
