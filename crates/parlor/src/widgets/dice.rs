//! Dice rolling.

use rand::Rng;
use tracing::{debug, instrument};

/// Faces on a standard die.
pub const STANDARD_SIDES: u32 = 6;

/// Dice failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DiceError {
    /// A die needs at least one face.
    #[display("A die needs at least one side")]
    NoFaces,
}

/// Rolls one die, uniform over `1..=sides`.
///
/// # Errors
///
/// Returns [`DiceError::NoFaces`] when `sides` is zero.
#[instrument(skip(rng))]
pub fn roll<R: Rng + ?Sized>(rng: &mut R, sides: u32) -> Result<u32, DiceError> {
    if sides == 0 {
        return Err(DiceError::NoFaces);
    }
    let value = rng.gen_range(1..=sides);
    debug!(value, "Rolled");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_standard_die_in_range_and_covers_faces() {
        let mut rng = StdRng::seed_from_u64(42);
        let rolls: Vec<u32> = (0..600)
            .map(|_| roll(&mut rng, STANDARD_SIDES).expect("six sides"))
            .collect();
        assert!(rolls.iter().all(|r| (1..=6).contains(r)));
        for face in 1..=6 {
            assert!(rolls.contains(&face), "face {} never rolled", face);
        }
    }

    #[test]
    fn test_single_sided_die() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(roll(&mut rng, 1), Ok(1));
    }

    #[test]
    fn test_zero_sides_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(roll(&mut rng, 0), Err(DiceError::NoFaces));
    }
}
