//! Rock-paper-scissors against the computer.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A hand.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Choice {
    /// Beats scissors.
    Rock,
    /// Beats rock.
    Paper,
    /// Beats paper.
    Scissors,
}

impl Choice {
    /// The hand this one beats.
    pub fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }

    /// Picks a hand uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Choice {
        const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];
        ALL[rng.gen_range(0..ALL.len())]
    }
}

/// Outcome from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Verdict {
    /// Player's hand beats the computer's.
    #[display("You Win!")]
    PlayerWins,
    /// Computer's hand beats the player's.
    #[display("Computer Wins!")]
    ComputerWins,
    /// Same hand.
    #[display("It's a Tie!")]
    Tie,
}

/// Resolves one round over Rock > Scissors > Paper > Rock.
#[instrument]
pub fn resolve(player: Choice, computer: Choice) -> Verdict {
    if player == computer {
        Verdict::Tie
    } else if player.beats() == computer {
        Verdict::PlayerWins
    } else {
        Verdict::ComputerWins
    }
}
