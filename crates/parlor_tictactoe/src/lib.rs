//! Tic-tac-toe engine for the parlor.
//!
//! Pure game logic with no I/O:
//!
//! - **Rules**: [`rules::evaluate`] scans the eight lines of a [`Board`]
//!   and yields a [`GameResult`].
//! - **Session**: [`GameSession`] owns one match and enforces move legality
//!   and turn order; [`AwaitingPlayers`] and [`Table`] model player entry.
//! - **Contracts**: move preconditions and postconditions, backed by
//!   composable [`invariants`].
//! - **Shared**: [`SharedTable`] serializes access for concurrent hosts.
//!
//! # Example
//!
//! ```
//! use parlor_tictactoe::{GameResult, GameSession, Mark, SessionError};
//!
//! let mut session = GameSession::start("Ann", "Bob")?;
//! for index in [0, 3, 1, 4, 2] {
//!     session.apply_move(index)?;
//! }
//! assert_eq!(session.result(), GameResult::Won(Mark::X));
//! assert_eq!(session.apply_move(5), Err(SessionError::GameAlreadyOver));
//! # Ok::<(), SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod error;
pub mod invariants;
mod outcome;
mod players;
mod position;
pub mod rules;
mod session;
mod shared;
mod types;

pub use action::Move;
pub use error::SessionError;
pub use outcome::GameResult;
pub use players::{Player, Players};
pub use position::Position;
pub use rules::{BoardViolation, Line, evaluate};
pub use session::{AwaitingPlayers, GameSession, Table};
pub use shared::SharedTable;
pub use types::{Board, Cell, Mark};
