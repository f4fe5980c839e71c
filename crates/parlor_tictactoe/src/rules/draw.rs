//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
///
/// A full board with no winner is a tie.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

/// Checks for a tie: full board and no completed line.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && super::check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark, Position};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Marked(Mark::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        // X O X / X O O / O X X
        let board = Board::from_cells([
            Cell::Marked(Mark::X),
            Cell::Marked(Mark::O),
            Cell::Marked(Mark::X),
            Cell::Marked(Mark::X),
            Cell::Marked(Mark::O),
            Cell::Marked(Mark::O),
            Cell::Marked(Mark::O),
            Cell::Marked(Mark::X),
            Cell::Marked(Mark::X),
        ]);
        assert!(is_full(&board));
        assert!(is_tie(&board));
    }

    #[test]
    fn test_not_tie_if_winner() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Cell::Marked(Mark::O));
        }
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}
