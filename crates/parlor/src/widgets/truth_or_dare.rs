//! Truth or dare prompts.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which list to draw from.
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
pub enum Kind {
    /// A question to answer honestly.
    Truth,
    /// A task to perform.
    Dare,
}

/// Truth questions.
pub const TRUTHS: &[&str] = &[
    "What's the most embarrassing thing you've ever done?",
    "What's a secret you've never told anyone?",
    "Who was your first crush?",
    "What's the biggest lie you've ever told?",
    "What's the most embarrassing thing you've ever worn?",
    "Have you ever cheated on a test?",
    "What's the weirdest dream you've ever had?",
    "Have you ever stolen something?",
    "What's your biggest fear?",
    "What's the most childish thing you still do?",
    "Who is your secret crush?",
    "What's your worst habit?",
    "What's the most embarrassing thing you've said to someone you like?",
    "What's the most embarrassing thing in your room?",
    "Have you ever lied to your best friend?",
    "What's the craziest thing you've done on a dare?",
    "Have you ever peed in a pool?",
    "What's the longest you've gone without showering?",
    "Have you ever pretended to be sick to get out of something?",
    "What's the grossest thing you've ever done?",
    "What's the most awkward date you've ever been on?",
    "Have you ever been caught picking your nose?",
    "What's the most embarrassing nickname you've ever had?",
    "What's the worst gift you've ever received?",
    "What's the weirdest food combination you've ever tried?",
    "Have you ever had a crush on a friend's sibling?",
    "What's the most embarrassing photo of you?",
    "What's the biggest rumor you've ever spread?",
    "What's the most embarrassing thing you've done in public?",
    "Have you ever farted in an elevator?",
    "What's the most awkward thing you've said in public?",
    "Have you ever snooped through someone's stuff?",
    "What's the most disgusting thing you've ever eaten?",
    "What's the most embarrassing thing you've done for attention?",
    "What's the weirdest thing you've ever done alone?",
    "Have you ever talked to yourself in the mirror?",
    "What's the worst thing you've ever smelled?",
    "Have you ever worn the same clothes for a week?",
    "What's the worst haircut you've ever had?",
    "Have you ever been caught singing in the shower?",
    "What's the most embarrassing thing you've done in front of a crowd?",
    "What's the worst thing you've ever tasted?",
    "What's the most embarrassing thing you've done on a date?",
    "What's the most childish thing you've done recently?",
    "What's the most embarrassing thing you've posted online?",
    "Have you ever lied about your age?",
    "What's the most embarrassing thing your parents have caught you doing?",
    "What's the most awkward text you've ever sent?",
    "What's the weirdest thing you've ever Googled?",
];

/// Dare tasks.
pub const DARES: &[&str] = &[
    "Dance with no music for 1 minute.",
    "Let someone tickle you for 30 seconds.",
    "Try to lick your elbow.",
    "Do an impression of your favorite celebrity.",
    "Talk in an accent for the next 3 rounds.",
    "Do 20 pushups.",
    "Sing the chorus of your favorite song.",
    "Let someone draw on your face with a pen.",
    "Wear socks on your hands until your next turn.",
    "Do your best chicken dance outside on the lawn.",
    "Eat a spoonful of mustard.",
    "Run around the outside of the house three times.",
    "Let someone write a word on your forehead in a marker.",
    "Do your best impression of a baby being born.",
    "Try to walk on your knees until your next turn.",
    "Let someone give you a wedgie.",
    "Eat a raw onion slice.",
    "Imitate a monkey until your next turn.",
    "Let someone else do your hair however they want.",
    "Talk in an accent until your next turn.",
    "Pretend to be a waiter/waitress and take snack orders from everyone in the group.",
    "Try to juggle 3 items (they don't have to be balls).",
    "Make a silly face and keep it that way until the next round.",
    "Let the person to your left draw on your face with a pen.",
    "Eat a raw egg.",
    "Dump a glass of cold water over your head.",
    "Hold your breath for 10 seconds.",
    "Speak in pig Latin for the next 3 rounds.",
    "Let someone pour ice down your shirt and pants.",
    "Imitate a celebrity of the group's choosing every time you talk.",
    "Let someone give you a makeover.",
    "Talk without moving your lips until your next turn.",
    "Let someone tickle you for one minute.",
    "Go outside and shout as loud as you can, 'I believe in fairies!'",
    "Let the group give you a new hairstyle.",
    "Wear your clothes backward for the next hour.",
    "Try to lick your foot.",
    "Eat a spoonful of hot sauce.",
    "Act like a chicken until your next turn.",
    "Let someone in the group write a word on your forehead in a marker.",
    "Eat a raw clove of garlic.",
    "Wear socks on your hands until it's your turn again.",
    "Do 20 jumping jacks.",
    "Let someone else tickle you for 30 seconds.",
    "Put ice cubes down your back.",
    "Imitate a monkey until it's your turn again.",
    "Speak in an accent chosen by the group until your next turn.",
    "Imitate a celebrity until it's your turn again.",
];

impl Kind {
    /// Every prompt of this kind.
    pub fn prompts(self) -> &'static [&'static str] {
        match self {
            Kind::Truth => TRUTHS,
            Kind::Dare => DARES,
        }
    }
}

/// Picks one prompt of `kind` uniformly at random.
#[instrument(skip(rng))]
pub fn draw<R: Rng + ?Sized>(kind: Kind, rng: &mut R) -> &'static str {
    let prompts = kind.prompts();
    prompts[rng.gen_range(0..prompts.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_draw_comes_from_matching_list() {
        let mut rng = StdRng::seed_from_u64(3);
        for kind in Kind::iter() {
            for _ in 0..50 {
                assert!(kind.prompts().contains(&draw(kind, &mut rng)));
            }
        }
    }

    #[test]
    fn test_lists_are_disjoint() {
        assert!(TRUTHS.iter().all(|t| !DARES.contains(t)));
    }

    #[test]
    fn test_seeded_draw_is_reproducible() {
        let a = draw(Kind::Dare, &mut StdRng::seed_from_u64(11));
        let b = draw(Kind::Dare, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }
}
