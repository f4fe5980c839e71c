//! Stateless rendering of a session plus cursor.

use parlor_tictactoe::{Cell, GameResult, GameSession, Mark, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

const HELP: &str = "Arrows move | Enter/Space or 1-9 place | r reset | q quit";

/// One line describing whose turn it is or how the game ended.
pub fn status_line(session: &GameSession) -> String {
    match session.result() {
        GameResult::InProgress => {
            let player = session.current_player();
            format!("{} ({}) to move", player.name(), player.mark())
        }
        GameResult::Won(mark) => format!(
            "{} ({}) wins! Press r to play again.",
            session.player_name(mark),
            mark
        ),
        GameResult::Tied => "It's a Tie! Press r to play again.".to_string(),
    }
}

/// Draws the whole screen. `notice` replaces the status line when set.
pub fn draw(frame: &mut Frame, session: &GameSession, cursor: Position, notice: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(CELL_HEIGHT * 3 + 2),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let players = session.players();
    let title = Paragraph::new(format!(
        "{} (X) vs {} (O)",
        players.name(Mark::X),
        players.name(Mark::O)
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], session, cursor);

    let status = notice
        .map(str::to_string)
        .unwrap_or_else(|| status_line(session));
    let style = if notice.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(status)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, session: &GameSession, cursor: Position) {
    let board_area = center_rect(area, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(inner);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            if let Some(pos) = Position::from_index(row * 3 + col) {
                draw_cell(frame, *cell_area, session, cursor, pos);
            }
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, session: &GameSession, cursor: Position, pos: Position) {
    let (symbol, base_style) = match session.board().get(pos) {
        Cell::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == cursor && !session.is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let cell = Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(cell, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
