//! Parlor: a handful of small apps behind one navigation shell.
//!
//! - **Widgets**: calculator, contacts, reminders, dice, calendar, typing
//!   test, rock-paper-scissors and truth-or-dare
//! - **Shell**: a line-oriented REPL that owns all widget state
//! - **Board view**: a full-screen tic-tac-toe board over `parlor_tictactoe`
//!
//! # Example
//!
//! ```
//! use parlor::{ParlorConfig, Parlor, Reply, Shell};
//!
//! let mut shell = Shell::new(Parlor::new(ParlorConfig::default().with_rng_seed(1)));
//! let reply = shell.execute("calc 7 / 2").expect("valid command");
//! assert_eq!(reply, Reply::Output("The result is: 3.50".to_string()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod board_view;
pub mod config;
pub mod shell;
pub mod state;
pub mod widgets;

pub use config::{ConfigError, DEFAULT_CONFIG_PATH, ParlorConfig};
pub use shell::{Reply, Shell, ShellError};
pub use state::Parlor;
