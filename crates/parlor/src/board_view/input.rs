//! Key handling for the full-screen board.

use crossterm::event::KeyCode;
use parlor_tictactoe::Position;

/// What a key press asks the board to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// Move the cursor here.
    Cursor(Position),
    /// Place the current mark here.
    Place(Position),
    /// Clear the board, keeping players.
    Reset,
    /// Leave the board.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Moves the cursor one cell, staying put at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps a key to an action. Digits 1-9 place directly, reading the board
/// left to right, top to bottom.
pub fn interpret(cursor: Position, key: KeyCode) -> BoardAction {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            BoardAction::Cursor(move_cursor(cursor, key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => BoardAction::Place(cursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(BoardAction::Ignore, BoardAction::Place),
        KeyCode::Char('r') | KeyCode::Char('R') => BoardAction::Reset,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => BoardAction::Quit,
        _ => BoardAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Down), Position::BottomLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
    }

    #[test]
    fn test_digits_place_directly() {
        assert_eq!(
            interpret(Position::Center, KeyCode::Char('1')),
            BoardAction::Place(Position::TopLeft)
        );
        assert_eq!(
            interpret(Position::Center, KeyCode::Char('9')),
            BoardAction::Place(Position::BottomRight)
        );
        assert_eq!(interpret(Position::Center, KeyCode::Char('0')), BoardAction::Ignore);
    }

    #[test]
    fn test_enter_space_reset_quit() {
        assert_eq!(
            interpret(Position::TopRight, KeyCode::Enter),
            BoardAction::Place(Position::TopRight)
        );
        assert_eq!(
            interpret(Position::TopRight, KeyCode::Char(' ')),
            BoardAction::Place(Position::TopRight)
        );
        assert_eq!(interpret(Position::Center, KeyCode::Char('r')), BoardAction::Reset);
        assert_eq!(interpret(Position::Center, KeyCode::Char('q')), BoardAction::Quit);
    }
}
