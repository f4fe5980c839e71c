//! Line-oriented navigation shell over every parlor app.

use crate::state::Parlor;
use crate::widgets::{
    self, CalcError, CalendarError, Choice, ContactError, DiceError, Kind, Operation,
    ReminderError, TypingError,
};
use chrono::{DateTime, Datelike, Utc};
use clap::{Parser, Subcommand};
use parlor_tictactoe::{GameResult, GameSession, SessionError};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

const PROMPT: &str = "parlor> ";

const APPS: &str = "\
Apps:
  calc <a> <op> <b>                 Simple calculator (+ - * /)
  contact add|list|show|delete      Contact diary
  remind add|list|due|delete        Reminders
  rps <rock|paper|scissors>         Rock paper scissors
  roll [--sides N]                  Dice rolling simulator
  calendar [year]                   Yearly calendar
  truth | dare                      Truth or dare
  typing start|status|submit        Typing speed test
  ttt start|move|show|reset|new     Tic tac toe
  quit                              Leave the parlor";

/// Rejection of a shell command. Never ends the shell.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum ShellError {
    /// Tic-tac-toe rejection.
    #[display("{}", _0)]
    Session(SessionError),
    /// Calculator rejection.
    #[display("{}", _0)]
    Calc(CalcError),
    /// Contact book rejection.
    #[display("{}", _0)]
    Contact(ContactError),
    /// Reminder rejection.
    #[display("{}", _0)]
    Reminder(ReminderError),
    /// Dice rejection.
    #[display("{}", _0)]
    Dice(DiceError),
    /// Calendar rejection.
    #[display("{}", _0)]
    Calendar(CalendarError),
    /// Typing test rejection.
    #[display("{}", _0)]
    Typing(TypingError),
    /// Input did not parse as a command.
    #[from(ignore)]
    #[display("{}", _0)]
    Usage(String),
    /// A double quote was never closed.
    #[from(ignore)]
    #[display("Unclosed quote in input")]
    UnclosedQuote,
    /// `typing status` or `submit` without `typing start`.
    #[from(ignore)]
    #[display("No typing test running; start one with `typing start`")]
    NoTypingTest,
}

impl std::error::Error for ShellError {}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep going.
    Output(String),
    /// Leave the shell.
    Quit,
}

/// Splits a line into words; double quotes group words and may be empty.
pub fn tokenize(line: &str) -> Result<Vec<String>, ShellError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        return Err(ShellError::UnclosedQuote);
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[derive(Parser, Debug)]
#[command(multicall = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// List the available apps
    Apps,

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

    /// Manage contacts
    Contact {
        #[command(subcommand)]
        action: ContactAction,
    },

    /// Manage reminders
    Remind {
        #[command(subcommand)]
        action: RemindAction,
    },

    /// Play rock paper scissors against the computer
    Rps {
        /// rock, paper or scissors
        choice: Choice,
    },

    /// Roll a die
    Roll {
        /// Number of sides (default from config)
        #[arg(long)]
        sides: Option<u32>,
    },

    /// Show a yearly calendar
    Calendar {
        /// Year to show (default: this year)
        year: Option<i32>,
    },

    /// Draw a truth question
    Truth,

    /// Draw a dare task
    Dare,

    /// Typing speed test
    Typing {
        #[command(subcommand)]
        action: TypingAction,
    },

    /// Tic tac toe
    Ttt {
        #[command(subcommand)]
        action: TttAction,
    },

    /// Leave the parlor
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
enum ContactAction {
    /// Add a contact
    Add {
        /// Name
        name: String,
        /// Phone number
        phone: String,
        /// Email address
        email: String,
    },
    /// List contacts
    List,
    /// Show one contact
    Show {
        /// Contact number from `contact list`
        index: usize,
    },
    /// Delete a contact
    Delete {
        /// Contact number from `contact list`
        index: usize,
    },
}

#[derive(Subcommand, Debug)]
enum RemindAction {
    /// Set a reminder
    Add {
        /// What to be reminded of
        message: String,
        /// When, as YYYY-MM-DD HH:MM (UTC)
        #[arg(num_args = 1.., required = true)]
        when: Vec<String>,
    },
    /// List reminders
    List,
    /// List reminders whose time has passed
    Due,
    /// Delete a reminder
    Delete {
        /// Reminder number from `remind list`
        index: usize,
    },
}

#[derive(Subcommand, Debug)]
enum TypingAction {
    /// Start the clock on a sample text
    Start,
    /// Show the time remaining
    Status,
    /// Submit what you typed
    Submit {
        /// The typed text
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        typed: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
enum TttAction {
    /// Seat two players
    Start {
        /// Player X name
        x: String,
        /// Player O name
        o: String,
    },
    /// Place the current player's mark
    Move {
        /// Cell index 0-8
        index: usize,
    },
    /// Show the board
    Show,
    /// Clear the board, keeping players
    Reset,
    /// Return to player entry
    New,
}

/// The shell: owns the parlor state and renders each command to text.
#[derive(Debug)]
pub struct Shell {
    parlor: Parlor,
}

impl Shell {
    /// Creates a shell over `parlor`.
    pub fn new(parlor: Parlor) -> Self {
        Self { parlor }
    }

    /// The state behind the shell.
    pub fn parlor(&self) -> &Parlor {
        &self.parlor
    }

    /// Runs one line at the current time.
    pub fn execute(&mut self, line: &str) -> Result<Reply, ShellError> {
        self.execute_at(line, Utc::now())
    }

    /// Runs one line as if the clock read `now`.
    ///
    /// # Errors
    ///
    /// Returns the rejection of the command; state is left unchanged.
    #[instrument(skip(self))]
    pub fn execute_at(&mut self, line: &str, now: DateTime<Utc>) -> Result<Reply, ShellError> {
        let words = tokenize(line)?;
        if words.is_empty() {
            return Ok(Reply::Output(String::new()));
        }

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(e) => {
                use clap::error::ErrorKind;
                let rendered = e.render().to_string().trim_end().to_string();
                return match e.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                        Ok(Reply::Output(rendered))
                    }
                    _ => Err(ShellError::Usage(rendered)),
                };
            }
        };
        debug!(command = ?parsed.command, "Parsed command");
        self.dispatch(parsed.command, now)
    }

    fn dispatch(&mut self, command: ShellCommand, now: DateTime<Utc>) -> Result<Reply, ShellError> {
        let text = match command {
            ShellCommand::Apps => APPS.to_string(),
            ShellCommand::Calc { a, op, b } => {
                let result = widgets::calculate(a, b, op)?;
                format!("The result is: {:.2}", result)
            }
            ShellCommand::Contact { action } => self.contact(action)?,
            ShellCommand::Remind { action } => self.remind(action, now)?,
            ShellCommand::Rps { choice } => {
                let computer = Choice::random(self.parlor.rng());
                let verdict = widgets::resolve(choice, computer);
                format!(
                    "You chose: {}\nComputer chose: {}\nResult: {}",
                    choice, computer, verdict
                )
            }
            ShellCommand::Roll { sides } => {
                let sides = sides.unwrap_or(*self.parlor.config().dice_sides());
                let value = widgets::roll(self.parlor.rng(), sides)?;
                format!("You rolled: {}", value)
            }
            ShellCommand::Calendar { year } => {
                let year = year.unwrap_or_else(|| now.year());
                let weekday = *self.parlor.config().first_weekday();
                widgets::render_year(year, weekday)?.trim_end().to_string()
            }
            ShellCommand::Truth => {
                format!("Truth Task\n{}", widgets::draw(Kind::Truth, self.parlor.rng()))
            }
            ShellCommand::Dare => {
                format!("Dare Task\n{}", widgets::draw(Kind::Dare, self.parlor.rng()))
            }
            ShellCommand::Typing { action } => self.typing(action, now)?,
            ShellCommand::Ttt { action } => self.ttt(action)?,
            ShellCommand::Quit => {
                info!("Shell quit requested");
                return Ok(Reply::Quit);
            }
        };
        Ok(Reply::Output(text))
    }

    fn contact(&mut self, action: ContactAction) -> Result<String, ShellError> {
        let book = self.parlor.contacts_mut();
        Ok(match action {
            ContactAction::Add { name, phone, email } => {
                book.add(&name, &phone, &email)?;
                "Contact added successfully!".to_string()
            }
            ContactAction::List => {
                if book.is_empty() {
                    "No contacts saved.".to_string()
                } else {
                    book.list()
                        .iter()
                        .enumerate()
                        .map(|(i, c)| format!("#{} {}", i, c.name()))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            ContactAction::Show { index } => {
                let contact = book.get(index).ok_or(ContactError::NotFound {
                    index,
                    len: book.len(),
                })?;
                format!(
                    "Name: {}\nPhone: {}\nEmail: {}",
                    contact.name(),
                    contact.phone(),
                    contact.email()
                )
            }
            ContactAction::Delete { index } => {
                book.delete(index)?;
                "Contact deleted successfully!".to_string()
            }
        })
    }

    fn remind(&mut self, action: RemindAction, now: DateTime<Utc>) -> Result<String, ShellError> {
        let board = self.parlor.reminders_mut();
        Ok(match action {
            RemindAction::Add { message, when } => {
                let when = widgets::reminders::parse_time(&when.join(" "))?;
                board.add(&message, when)?;
                "Reminder set successfully!".to_string()
            }
            RemindAction::List => {
                if board.is_empty() {
                    "No notifications set.".to_string()
                } else {
                    board
                        .list()
                        .iter()
                        .enumerate()
                        .map(|(i, r)| format!("#{} {}", i, r))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            RemindAction::Due => {
                let due = board.due(now);
                if due.is_empty() {
                    "Nothing due.".to_string()
                } else {
                    due.iter()
                        .map(|(i, r)| format!("#{} {}", i, r))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            RemindAction::Delete { index } => {
                board.delete(index)?;
                "Reminder deleted successfully!".to_string()
            }
        })
    }

    fn typing(&mut self, action: TypingAction, now: DateTime<Utc>) -> Result<String, ShellError> {
        Ok(match action {
            TypingAction::Start => {
                let test = self.parlor.start_typing(now);
                format!(
                    "Type the following text as quickly and accurately as you can:\n{}\nYou have {} seconds. Submit with `typing submit <text>`.",
                    test.text(),
                    test.time_limit().num_seconds()
                )
            }
            TypingAction::Status => {
                let test = self.parlor.typing().ok_or(ShellError::NoTypingTest)?;
                if test.is_expired(now) {
                    "Time is up! Submit with `typing submit <text>`.".to_string()
                } else {
                    let remaining = test.remaining(now).num_milliseconds() as f64 / 1000.0;
                    format!("Time remaining: {:.2} seconds", remaining)
                }
            }
            TypingAction::Submit { typed } => {
                let test = self.parlor.typing().ok_or(ShellError::NoTypingTest)?;
                let report = test.finish(now, &typed.join(" "))?;
                self.parlor.take_typing();
                report.to_string()
            }
        })
    }

    fn ttt(&mut self, action: TttAction) -> Result<String, ShellError> {
        let table = self.parlor.table_mut();
        match action {
            TttAction::Start { x, o } => {
                let session = table.start(&x, &o)?;
                Ok(render_session(session))
            }
            TttAction::Move { index } => {
                if let Err(e) = table.apply_move(index) {
                    warn!(index, error = %e, "Move rejected");
                    return Err(e.into());
                }
                session_text(table.session())
            }
            TttAction::Show => session_text(table.session()),
            TttAction::Reset => {
                table.reset()?;
                session_text(table.session())
            }
            TttAction::New => {
                table.full_reset();
                Ok("Enter player names with `ttt start <x> <o>`.".to_string())
            }
        }
    }

    /// Reads commands from `input` until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Only I/O failures end the loop early.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        info!("Shell started");
        writeln!(output, "Welcome to the parlor. Type `apps` to see what's here.")?;
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        for line in input.lines() {
            match self.execute(&line?) {
                Ok(Reply::Output(text)) => {
                    if !text.is_empty() {
                        writeln!(output, "{}", text)?;
                    }
                }
                Ok(Reply::Quit) => return Ok(()),
                Err(e) => {
                    warn!(error = %e, "Command rejected");
                    writeln!(output, "{}", e)?;
                }
            }
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }
        debug!("Input closed");
        Ok(())
    }
}

fn session_text(session: Option<&GameSession>) -> Result<String, ShellError> {
    let session = session.ok_or(SessionError::NoActiveSession)?;
    Ok(render_session(session))
}

fn render_session(session: &GameSession) -> String {
    let players = session.players();
    let header = format!(
        "{} (X) vs {} (O)",
        players.name(parlor_tictactoe::Mark::X),
        players.name(parlor_tictactoe::Mark::O)
    );
    let status = match session.result() {
        GameResult::InProgress => {
            let player = session.current_player();
            format!("{} ({}) to move", player.name(), player.mark())
        }
        GameResult::Won(mark) => format!("{} ({}) wins!", session.player_name(mark), mark),
        GameResult::Tied => "It's a Tie!".to_string(),
    };
    format!("{}\n{}\n{}", header, session.board().display(), status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_groups_quotes() {
        assert_eq!(
            tokenize(r#"contact add "Ann Lee" 555 ann@x"#).expect("closed"),
            ["contact", "add", "Ann Lee", "555", "ann@x"]
        );
        assert_eq!(tokenize(r#"ttt start "" Bob"#).expect("closed"), ["ttt", "start", "", "Bob"]);
        assert!(tokenize("   ").expect("blank").is_empty());
    }

    #[test]
    fn test_tokenize_rejects_open_quote() {
        assert!(matches!(tokenize(r#"say "hi"#), Err(ShellError::UnclosedQuote)));
    }

    #[test]
    fn test_negative_calc_operands_parse() {
        let parsed = ShellLine::try_parse_from(["calc", "-2", "-", "-3"]).expect("parses");
        assert!(matches!(
            parsed.command,
            ShellCommand::Calc { a, op: Operation::Subtract, b } if a == -2.0 && b == -3.0
        ));
    }
}
