//! Single-tournament simulation: random matchmaking, fair-coin games,
//! dynamic elimination, final ranking.

use std::cmp::Reverse;

use rand::Rng;

use crate::config::{ConfigError, TournamentConfig};
use crate::player::Player;
use crate::pool::MatchmakingPool;

/// Runs qualifying tournaments for a fixed configuration.
pub struct TournamentRunner {
    config: TournamentConfig,
}

impl TournamentRunner {
    pub fn new(config: TournamentConfig) -> Self {
        Self { config }
    }

    /// Simulate one tournament.
    ///
    /// Every game is a fair coin flip. Returns one record per entrant,
    /// sorted by wins descending; ties keep entrant order, so rank positions
    /// index deterministically into the result.
    pub fn run<R: Rng>(&self, rng: &mut R) -> Result<Vec<Player>, ConfigError> {
        self.config.validate()?;
        Ok(self.play(rng))
    }

    /// The pairing loop. Assumes a validated configuration.
    ///
    /// Entrants are processed in creation order, each playing random
    /// opponents from the shared pool until finished. Termination is
    /// structural: the pool only shrinks, and no player exceeds `rounds`
    /// games.
    pub(crate) fn play<R: Rng>(&self, rng: &mut R) -> Vec<Player> {
        let TournamentConfig { entrants, rounds } = self.config;
        let mut players = vec![Player::new(); entrants];
        let mut pool = MatchmakingPool::new(entrants);

        for current in 0..entrants {
            // the current entrant starts playing and leaves the pool
            pool.remove(current);

            // a drained pool ends matchmaking for the whole tournament, not
            // just for this entrant; later entrants stay under-played
            if pool.is_empty() {
                break;
            }

            while !players[current].is_finished(rounds) {
                if pool.is_empty() {
                    break;
                }
                let Some(opponent) = pool.pick_opponent(rng, current) else {
                    break;
                };

                // heads the current player wins, tails the opponent does
                if rng.gen_bool(0.5) {
                    players[current].record_win();
                    players[opponent].record_loss();
                } else {
                    players[current].record_loss();
                    players[opponent].record_win();
                }

                if players[opponent].is_finished(rounds) {
                    pool.remove(opponent);
                }
            }
        }

        rank_players(&mut players);
        players
    }
}

/// Stable wins-descending ordering; tied players keep their relative order.
pub fn rank_players(players: &mut [Player]) {
    players.sort_by_key(|player| Reverse(player.wins));
}

/// One-off simulation without keeping a runner around.
pub fn simulate_tournament<R: Rng>(
    entrants: usize,
    rounds: u32,
    rng: &mut R,
) -> Result<Vec<Player>, ConfigError> {
    TournamentRunner::new(TournamentConfig::new(entrants, rounds)).run(rng)
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;
