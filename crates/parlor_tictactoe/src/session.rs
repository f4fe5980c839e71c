//! Session lifecycle: player entry, play, reset.
//!
//! ```text
//! AwaitingPlayers --start--> GameSession(InProgress)
//! GameSession --apply_move--> InProgress | Won | Tied
//! GameSession --reset--> GameSession(InProgress), same players
//! GameSession --full_reset--> AwaitingPlayers
//! ```

use super::contracts::{Contract, MoveContract};
use super::{Board, Cell, GameResult, Mark, Move, Player, Players, Position, SessionError, rules};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Player entry: no session exists yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AwaitingPlayers;

impl AwaitingPlayers {
    /// Creates the player-entry state.
    pub fn new() -> Self {
        Self
    }

    /// Starts a session with two player names.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidConfiguration`] if a name is empty.
    #[instrument(skip(self))]
    pub fn start(self, name_x: &str, name_o: &str) -> Result<GameSession, SessionError> {
        GameSession::start(name_x, name_o)
    }
}

/// One match: board, turn, players, history and result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    pub(crate) players: Players,
    pub(crate) board: Board,
    pub(crate) turn: Mark,
    pub(crate) result: GameResult,
    pub(crate) history: Vec<Move>,
}

impl GameSession {
    /// Starts a session: empty board, X to move, result in progress.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidConfiguration`] if a name is empty.
    #[instrument]
    pub fn start(name_x: &str, name_o: &str) -> Result<Self, SessionError> {
        let players = Players::new(name_x, name_o)?;
        info!(
            player_x = players.name(Mark::X),
            player_o = players.name(Mark::O),
            "Session started"
        );
        Ok(Self::with_players(players))
    }

    fn with_players(players: Players) -> Self {
        Self {
            players,
            board: Board::new(),
            turn: Mark::X,
            result: GameResult::InProgress,
            history: Vec::new(),
        }
    }

    /// Places the current player's marker at `index` (0-8).
    ///
    /// Checks, in order: the game is not over, the index is on the board,
    /// the cell is empty. A rejected move leaves the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GameAlreadyOver`], [`SessionError::OutOfRange`]
    /// or [`SessionError::CellOccupied`].
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameResult, SessionError> {
        let position = MoveContract::pre(self, &index).inspect_err(|e| {
            warn!(index, error = %e, "Move rejected");
        })?;

        let mut next = self.clone();
        let mark = next.turn;
        next.board.set(position, Cell::Marked(mark));
        next.history.push(Move::new(mark, position));
        next.result = rules::evaluate(&next.board);
        if !next.result.is_terminal() {
            next.turn = mark.opponent();
        }

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        *self = next;
        match self.result {
            GameResult::InProgress => debug!(%position, %mark, "Move applied"),
            GameResult::Won(winner) => {
                info!(%winner, name = self.players.name(winner), "Game won")
            }
            GameResult::Tied => info!("Game tied"),
        }
        Ok(self.result)
    }

    /// Clears board, history and result; X moves next; players are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Resetting board");
        *self = Self::with_players(self.players.clone());
    }

    /// Discards the match and its players, returning to player entry.
    #[instrument(skip(self))]
    pub fn full_reset(self) -> AwaitingPlayers {
        info!("Returning to player entry");
        AwaitingPlayers
    }

    /// Rebuilds a session by playing `indices` in order.
    ///
    /// # Errors
    ///
    /// Fails on invalid names or on the first rejected move.
    #[instrument]
    pub fn replay(name_x: &str, name_o: &str, indices: &[usize]) -> Result<Self, SessionError> {
        let mut session = Self::start(name_x, name_o)?;
        for index in indices {
            session.apply_move(*index)?;
        }
        Ok(session)
    }

    /// Board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker to move next (or the last mover once the game is over).
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Current result.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Both players.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Display name of the player bound to a marker.
    pub fn player_name(&self, mark: Mark) -> &str {
        self.players.name(mark)
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.players.get(self.turn)
    }

    /// The winning player, once the game is won.
    pub fn winner(&self) -> Option<&Player> {
        self.result.winner().map(|mark| self.players.get(mark))
    }

    /// Moves of this match in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Empty positions; none once the game is over.
    pub fn open_positions(&self) -> Vec<Position> {
        if self.result.is_terminal() {
            Vec::new()
        } else {
            Position::open_positions(&self.board)
        }
    }

    /// Whether further moves are accepted.
    pub fn is_over(&self) -> bool {
        self.result.is_terminal()
    }
}

/// Holder for presenters that keep a table across interactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Table {
    /// Waiting for two player names.
    AwaitingPlayers(AwaitingPlayers),
    /// A session is running or finished.
    Seated(GameSession),
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// Creates a table in player entry.
    pub fn new() -> Self {
        Table::AwaitingPlayers(AwaitingPlayers)
    }

    /// Seats two players.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadySeated`] if a session exists, or
    /// [`SessionError::InvalidConfiguration`] for a missing name.
    #[instrument(skip(self))]
    pub fn start(&mut self, name_x: &str, name_o: &str) -> Result<&GameSession, SessionError> {
        let Table::AwaitingPlayers(awaiting) = self else {
            warn!("Start requested while players are seated");
            return Err(SessionError::AlreadySeated);
        };
        let session = awaiting.start(name_x, name_o)?;
        *self = Table::Seated(session);
        self.session().ok_or(SessionError::NoActiveSession)
    }

    /// Applies a move to the seated session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] in player entry, otherwise
    /// the session's move rejection.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameResult, SessionError> {
        self.session_mut()?.apply_move(index)
    }

    /// Resets the board, keeping players.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] in player entry.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.session_mut()?.reset();
        Ok(())
    }

    /// Returns to player entry, discarding any session.
    #[instrument(skip(self))]
    pub fn full_reset(&mut self) {
        let awaiting = match std::mem::take(self) {
            Table::Seated(session) => session.full_reset(),
            Table::AwaitingPlayers(awaiting) => awaiting,
        };
        *self = Table::AwaitingPlayers(awaiting);
    }

    /// The seated session, if any.
    pub fn session(&self) -> Option<&GameSession> {
        match self {
            Table::Seated(session) => Some(session),
            Table::AwaitingPlayers(_) => None,
        }
    }

    fn session_mut(&mut self) -> Result<&mut GameSession, SessionError> {
        match self {
            Table::Seated(session) => Ok(session),
            Table::AwaitingPlayers(_) => Err(SessionError::NoActiveSession),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> GameSession {
        GameSession::start("Ann", "Bob").expect("valid names")
    }

    #[test]
    fn test_start_state() {
        let session = started();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.turn(), Mark::X);
        assert_eq!(session.result(), GameResult::InProgress);
        assert_eq!(session.current_player().name(), "Ann");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_turn_alternates() {
        let mut session = started();
        session.apply_move(4).expect("legal move");
        assert_eq!(session.turn(), Mark::O);
        session.apply_move(0).expect("legal move");
        assert_eq!(session.turn(), Mark::X);
        assert_eq!(session.board().get(Position::Center), Cell::Marked(Mark::X));
        assert_eq!(session.board().get(Position::TopLeft), Cell::Marked(Mark::O));
    }

    #[test]
    fn test_rejections_leave_session_unchanged() {
        let mut session = started();
        session.apply_move(4).expect("legal move");
        let before = session.clone();

        assert_eq!(session.apply_move(4), Err(SessionError::CellOccupied(Position::Center)));
        assert_eq!(session.apply_move(9), Err(SessionError::OutOfRange(9)));
        assert_eq!(session, before);
    }

    #[test]
    fn test_game_over_checked_before_range() {
        let mut session = GameSession::replay("Ann", "Bob", &[0, 3, 1, 4, 2]).expect("replay");
        assert_eq!(session.apply_move(42), Err(SessionError::GameAlreadyOver));
        assert_eq!(session.apply_move(0), Err(SessionError::GameAlreadyOver));
    }

    #[test]
    fn test_turn_kept_after_win() {
        let session = GameSession::replay("Ann", "Bob", &[0, 3, 1, 4, 2]).expect("replay");
        assert_eq!(session.result(), GameResult::Won(Mark::X));
        assert_eq!(session.turn(), Mark::X);
        assert_eq!(session.winner().map(|p| p.name().as_str()), Some("Ann"));
        assert!(session.open_positions().is_empty());
    }

    #[test]
    fn test_reset_keeps_players() {
        let mut session = GameSession::replay("Ann", "Bob", &[0, 3, 1]).expect("replay");
        session.reset();
        assert_eq!(session, started());
    }

    #[test]
    fn test_table_lifecycle() {
        let mut table = Table::new();
        assert_eq!(table.apply_move(0), Err(SessionError::NoActiveSession));
        assert_eq!(table.reset(), Err(SessionError::NoActiveSession));

        assert_eq!(
            table.start("", "Bob").map(|_| ()),
            Err(SessionError::InvalidConfiguration(Mark::X))
        );
        assert!(table.session().is_none());

        table.start("Ann", "Bob").expect("valid names");
        assert_eq!(table.start("Cy", "Di").map(|_| ()), Err(SessionError::AlreadySeated));
        table.apply_move(0).expect("legal move");

        table.full_reset();
        assert!(table.session().is_none());
        assert_eq!(table.apply_move(0), Err(SessionError::NoActiveSession));
    }
}
