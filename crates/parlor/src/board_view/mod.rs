//! Full-screen tic-tac-toe board.

mod input;
mod ui;

pub use input::{BoardAction, interpret, move_cursor};
pub use ui::{draw, status_line};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use parlor_tictactoe::{GameSession, Position};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error, info, instrument, warn};

/// Log file used while the board owns the terminal.
pub const LOG_FILE: &str = "parlor_tui.log";

/// A session plus the cursor and the last rejection message.
#[derive(Debug, Clone)]
pub struct BoardView {
    session: GameSession,
    cursor: Position,
    notice: Option<String>,
}

impl BoardView {
    /// Wraps a started session with the cursor in the center.
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            cursor: Position::Center,
            notice: None,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Last rejection, cleared by the next key.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Applies one action. Returns `false` when the board should close.
    #[instrument(skip(self), fields(cursor = %self.cursor))]
    pub fn handle(&mut self, action: BoardAction) -> bool {
        self.notice = None;
        match action {
            BoardAction::Cursor(pos) => self.cursor = pos,
            BoardAction::Place(pos) => {
                self.cursor = pos;
                match self.session.apply_move(pos.to_index()) {
                    Ok(result) => debug!(%result, "Move placed"),
                    Err(e) => {
                        warn!(error = %e, "Move rejected");
                        self.notice = Some(e.to_string());
                    }
                }
            }
            BoardAction::Reset => {
                info!("Board reset");
                self.session.reset();
                self.cursor = Position::Center;
            }
            BoardAction::Quit => return false,
            BoardAction::Ignore => {}
        }
        true
    }
}

/// Runs the board until the player quits.
///
/// Logging goes to [`LOG_FILE`] so it does not corrupt the screen.
pub fn run(session: GameSession, log_filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(LOG_FILE)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting board");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = event_loop(&mut terminal, BoardView::new(session));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Board loop error");
    }
    res
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut view: BoardView,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, view.session(), view.cursor(), view.notice()))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if !view.handle(interpret(view.cursor(), key.code)) {
                info!("Player quit");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_tictactoe::{Cell, GameResult, Mark};

    fn view() -> BoardView {
        BoardView::new(GameSession::start("Ann", "Bob").expect("valid"))
    }

    #[test]
    fn test_place_at_cursor() {
        let mut view = view();
        assert!(view.handle(BoardAction::Place(Position::Center)));
        assert_eq!(view.session().board().get(Position::Center), Cell::Marked(Mark::X));
        assert!(view.notice().is_none());
    }

    #[test]
    fn test_rejection_becomes_notice_and_clears() {
        let mut view = view();
        view.handle(BoardAction::Place(Position::Center));
        view.handle(BoardAction::Place(Position::Center));
        assert!(view.notice().is_some());
        assert_eq!(view.session().history().len(), 1);

        view.handle(BoardAction::Cursor(Position::TopLeft));
        assert!(view.notice().is_none());
        assert_eq!(view.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_reset_keeps_players() {
        let mut view = view();
        for index in [0, 3, 1, 4, 2] {
            view.handle(BoardAction::Place(Position::ALL[index]));
        }
        assert_eq!(view.session().result(), GameResult::Won(Mark::X));

        view.handle(BoardAction::Reset);
        assert_eq!(view.session().result(), GameResult::InProgress);
        assert_eq!(view.session().player_name(Mark::O), "Bob");
    }

    #[test]
    fn test_quit_stops() {
        assert!(!view().handle(BoardAction::Quit));
    }
}
