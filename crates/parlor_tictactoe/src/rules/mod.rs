//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! the session so presenters and invariants can consult them directly.

pub mod audit;
pub mod draw;
pub mod win;

pub use audit::{BoardViolation, audit};
pub use draw::{is_full, is_tie};
pub use win::{LINES, Line, check_winner, completed_lines, evaluate, winning_line};
