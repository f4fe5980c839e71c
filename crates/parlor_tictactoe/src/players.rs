//! Player identities bound to markers.

use super::{Mark, SessionError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// A named player bound to one marker for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker this player places.
    mark: Mark,
}

/// The two players of a session. Markers are disjoint by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Players {
    x: Player,
    o: Player,
}

impl Players {
    /// Binds two names to X and O. Names are trimmed and must not be empty.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidConfiguration`] naming the first marker
    /// whose player name is missing.
    #[instrument(skip(name_x, name_o))]
    pub fn new(name_x: &str, name_o: &str) -> Result<Self, SessionError> {
        let name_x = name_x.trim();
        let name_o = name_o.trim();

        for (name, mark) in [(name_x, Mark::X), (name_o, Mark::O)] {
            if name.is_empty() {
                warn!(%mark, "Missing player name");
                return Err(SessionError::InvalidConfiguration(mark));
            }
        }

        Ok(Self {
            x: Player {
                name: name_x.to_string(),
                mark: Mark::X,
            },
            o: Player {
                name: name_o.to_string(),
                mark: Mark::O,
            },
        })
    }

    /// The player bound to a marker.
    pub fn get(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Display name of the player bound to a marker.
    pub fn name(&self, mark: Mark) -> &str {
        self.get(mark).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_bound_to_markers() {
        let players = Players::new("Ann", "Bob").expect("valid names");
        assert_eq!(players.name(Mark::X), "Ann");
        assert_eq!(players.name(Mark::O), "Bob");
        assert_eq!(*players.get(Mark::O).mark(), Mark::O);
    }

    #[test]
    fn test_names_trimmed() {
        let players = Players::new("  Ann ", "Bob\n").expect("valid names");
        assert_eq!(players.name(Mark::X), "Ann");
        assert_eq!(players.name(Mark::O), "Bob");
    }

    #[test]
    fn test_blank_names_rejected() {
        assert_eq!(
            Players::new("", "Bob"),
            Err(SessionError::InvalidConfiguration(Mark::X))
        );
        assert_eq!(
            Players::new("Ann", "   "),
            Err(SessionError::InvalidConfiguration(Mark::O))
        );
    }
}
