//! Win/loss record and finish/drop rules for a single entrant.

use std::fmt;

/// Mutable win/loss counter for one tournament entrant.
///
/// A player starts with an empty record and is only mutated by the
/// tournament loop resolving games it takes part in. Exactly one counter
/// grows by exactly one per resolved game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Player {
    pub wins: u32,
    pub losses: u32,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total games resolved for this player.
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    /// Whether a winning or even record is already out of reach.
    ///
    /// The drop boundary is `losses > rounds / 2` under exact division,
    /// written as `2 * losses > rounds`. For whole-number loss counts this
    /// coincides with the floor reading: the first dropping loss count is
    /// `rounds / 2 + 1` (integer division) either way.
    pub fn has_dropped(&self, rounds: u32) -> bool {
        2 * self.losses > rounds
    }

    /// Whether this player takes no further games: the full schedule has
    /// been played out, or the player has dropped.
    pub fn is_finished(&self, rounds: u32) -> bool {
        self.games_played() >= rounds || self.has_dropped(rounds)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.wins, self.losses)
    }
}
