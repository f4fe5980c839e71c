//! Command-line interface for parlor.

use parlor::widgets::{Choice, Operation};
use clap::{Parser, Subcommand};
use parlor::DEFAULT_CONFIG_PATH;
use std::path::PathBuf;

/// Parlor - calculator, contacts, reminders, games and more
#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(about = "A parlor of small terminal apps", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Fixed RNG seed, overriding the config
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive shell
    Shell,

    /// Play tic-tac-toe on a full-screen board
    Tictactoe {
        /// Name of player X
        #[arg(long)]
        player_x: String,

        /// Name of player O
        #[arg(long)]
        player_o: String,
    },

    /// Calculate `a <op> b`
    #[command(allow_negative_numbers = true)]
    Calc {
        /// First number
        a: f64,
        /// add, subtract, multiply, divide or + - * /
        op: Operation,
        /// Second number
        b: f64,
    },

    /// Roll a die
    Roll {
        /// Number of sides (default from config)
        #[arg(long)]
        sides: Option<u32>,
    },

    /// Print a yearly calendar
    Calendar {
        /// Year to show (default: this year)
        year: Option<i32>,
    },

    /// Play one round of rock paper scissors
    Rps {
        /// rock, paper or scissors
        choice: Choice,
    },

    /// Draw a truth question
    Truth,

    /// Draw a dare task
    Dare,
}

impl Command {
    /// Whether this command takes over the terminal.
    pub fn is_board(&self) -> bool {
        matches!(self, Command::Tictactoe { .. })
    }
}
