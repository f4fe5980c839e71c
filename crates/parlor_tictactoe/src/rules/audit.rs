//! Strict board evaluation.
//!
//! [`evaluate`](super::evaluate) is total and reports the first completed
//! line. A board built by legal play can never hold lines of both markers,
//! so `audit` treats such a board, and any board whose marker counts could
//! not come from alternating turns, as a violation instead of picking one.

use super::super::{Board, GameResult, Mark};
use super::win::{Line, completed_lines};
use tracing::{instrument, warn};

/// A board no legal sequence of moves could produce.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardViolation {
    /// Completed lines belong to different markers.
    #[display("Both markers completed a line ({} and {})", x_line, o_line)]
    ConflictingWinners {
        /// A line held by X.
        x_line: Line,
        /// A line held by O.
        o_line: Line,
    },

    /// X moves first, so X must have as many marks as O or one more.
    #[display("Unbalanced marks: {} X, {} O", x_count, o_count)]
    UnbalancedMarks {
        /// Number of X marks.
        x_count: usize,
        /// Number of O marks.
        o_count: usize,
    },
}

impl std::error::Error for BoardViolation {}

/// Evaluates a board, rejecting boards unreachable by legal play.
#[instrument(skip(board))]
pub fn audit(board: &Board) -> Result<GameResult, BoardViolation> {
    let x_count = board.count(Mark::X);
    let o_count = board.count(Mark::O);
    if x_count != o_count && x_count != o_count + 1 {
        warn!(x_count, o_count, "Board marks unbalanced");
        return Err(BoardViolation::UnbalancedMarks { x_count, o_count });
    }

    let lines = completed_lines(board);
    let x_line = lines.iter().find(|l| l.owner(board) == Some(Mark::X));
    let o_line = lines.iter().find(|l| l.owner(board) == Some(Mark::O));
    if let (Some(x_line), Some(o_line)) = (x_line, o_line) {
        warn!(%x_line, %o_line, "Board has winners for both markers");
        return Err(BoardViolation::ConflictingWinners {
            x_line: *x_line,
            o_line: *o_line,
        });
    }

    Ok(super::evaluate(board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    fn mark(board: &mut Board, mark: Mark, positions: &[usize]) {
        for idx in positions {
            if let Some(pos) = Position::from_index(*idx) {
                board.set(pos, Cell::Marked(mark));
            }
        }
    }

    #[test]
    fn test_legal_board_passes() {
        let mut board = Board::new();
        mark(&mut board, Mark::X, &[0, 1, 2]);
        mark(&mut board, Mark::O, &[3, 4]);
        assert_eq!(audit(&board), Ok(GameResult::Won(Mark::X)));
    }

    #[test]
    fn test_double_line_same_marker_passes() {
        // X completes a row and a column with one move.
        let mut board = Board::new();
        mark(&mut board, Mark::X, &[0, 1, 2, 3, 6]);
        mark(&mut board, Mark::O, &[4, 5, 7, 8]);
        assert_eq!(audit(&board), Ok(GameResult::Won(Mark::X)));
    }

    #[test]
    fn test_conflicting_winners_rejected() {
        let mut board = Board::new();
        mark(&mut board, Mark::X, &[0, 1, 2]);
        mark(&mut board, Mark::O, &[6, 7, 8]);
        assert!(matches!(
            audit(&board),
            Err(BoardViolation::ConflictingWinners { .. })
        ));
    }

    #[test]
    fn test_unbalanced_marks_rejected() {
        let mut board = Board::new();
        mark(&mut board, Mark::O, &[0]);
        assert_eq!(
            audit(&board),
            Err(BoardViolation::UnbalancedMarks {
                x_count: 0,
                o_count: 1
            })
        );
    }
}
