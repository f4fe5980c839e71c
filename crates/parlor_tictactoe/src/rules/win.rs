//! Win detection logic for tic-tac-toe.

use super::super::{Board, GameResult, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win when held by one marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    positions: [Position; 3],
}

impl Line {
    const fn new(a: Position, b: Position, c: Position) -> Self {
        Self {
            positions: [a, b, c],
        }
    }

    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.positions
    }

    /// Checks whether the line contains a position.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Returns the marker holding all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.positions;
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark)).then_some(mark)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.positions;
        write!(f, "{}, {}, {}", a, b, c)
    }
}

/// The eight lines in evaluation order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line::new(Position::TopLeft, Position::TopCenter, Position::TopRight),
    Line::new(Position::MiddleLeft, Position::Center, Position::MiddleRight),
    Line::new(Position::BottomLeft, Position::BottomCenter, Position::BottomRight),
    // Columns
    Line::new(Position::TopLeft, Position::MiddleLeft, Position::BottomLeft),
    Line::new(Position::TopCenter, Position::Center, Position::BottomCenter),
    Line::new(Position::TopRight, Position::MiddleRight, Position::BottomRight),
    // Diagonals
    Line::new(Position::TopLeft, Position::Center, Position::BottomRight),
    Line::new(Position::TopRight, Position::Center, Position::BottomLeft),
];

/// First completed line in evaluation order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|line| line.owner(board).is_some())
}

/// Every completed line, in evaluation order.
#[instrument(skip(board))]
pub fn completed_lines(board: &Board) -> Vec<Line> {
    LINES
        .into_iter()
        .filter(|line| line.owner(board).is_some())
        .collect()
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first completed line in evaluation order.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|line| line.owner(board))
}

/// Evaluates a board: `Won` if a line is complete, `Tied` if the board is
/// full, `InProgress` otherwise.
///
/// Total over every board; the first completed line wins.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameResult {
    if let Some(mark) = check_winner(board) {
        GameResult::Won(mark)
    } else if super::is_full(board) {
        GameResult::Tied
    } else {
        GameResult::InProgress
    }
}
