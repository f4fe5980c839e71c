//! Parlor - unified CLI
//!
//! One-shot widget commands, the interactive shell, and the full-screen board.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use chrono::{Datelike, Utc};
use clap::Parser;
use cli::{Cli, Command};
use parlor::widgets::{self, Choice, Kind};
use parlor::{Parlor, ParlorConfig, Shell, board_view};
use parlor_tictactoe::GameSession;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = ParlorConfig::load_or_default(&cli.config)?;
    if let Some(seed) = cli.seed {
        config = config.with_rng_seed(seed);
    }

    // The board logs to its own file once it owns the terminal.
    if !cli.command.is_board() {
        init_logging(config.log_filter());
    }
    debug!(path = %cli.config.display(), "Config ready");
    run_command(cli.command, Parlor::new(config))
}

/// Dispatch one command
#[instrument(skip(parlor))]
fn run_command(command: Command, mut parlor: Parlor) -> Result<()> {
    match command {
        Command::Shell => run_shell(parlor),
        Command::Tictactoe { player_x, player_o } => {
            run_board(&player_x, &player_o, parlor.config())
        }
        Command::Calc { a, op, b } => {
            let result = widgets::calculate(a, b, op)?;
            println!("The result is: {:.2}", result);
            Ok(())
        }
        Command::Roll { sides } => {
            let sides = sides.unwrap_or(*parlor.config().dice_sides());
            println!("You rolled: {}", widgets::roll(parlor.rng(), sides)?);
            Ok(())
        }
        Command::Calendar { year } => {
            let year = year.unwrap_or_else(|| Utc::now().year());
            let weekday = *parlor.config().first_weekday();
            print!("{}", widgets::render_year(year, weekday)?);
            Ok(())
        }
        Command::Rps { choice } => {
            let computer = Choice::random(parlor.rng());
            println!("You chose: {}", choice);
            println!("Computer chose: {}", computer);
            println!("Result: {}", widgets::resolve(choice, computer));
            Ok(())
        }
        Command::Truth => {
            println!("{}", widgets::draw(Kind::Truth, parlor.rng()));
            Ok(())
        }
        Command::Dare => {
            println!("{}", widgets::draw(Kind::Dare, parlor.rng()));
            Ok(())
        }
    }
}

/// Logs to stderr so command output on stdout stays clean.
fn init_logging(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive shell on stdin/stdout
#[instrument(skip(parlor))]
fn run_shell(parlor: Parlor) -> Result<()> {
    info!("Starting parlor shell");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(parlor).run(stdin.lock(), stdout.lock())?;
    info!("Shell closed");
    Ok(())
}

/// Run the full-screen tic-tac-toe board
fn run_board(player_x: &str, player_o: &str, config: &ParlorConfig) -> Result<()> {
    let session = GameSession::start(player_x, player_o)?;
    board_view::run(session, config.log_filter())
}
