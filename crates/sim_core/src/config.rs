//! Simulation parameters and their validation.
//!
//! Validation runs before any player is created, so an invalid configuration
//! never starts a partial simulation.

use thiserror::Error;

/// Errors produced by configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tournament needs at least one entrant")]
    NoEntrants,
    #[error("tournament needs at least one round")]
    NoRounds,
    #[error("top cut of {top_cut} is outside 1..={entrants}")]
    TopCutOutOfRange { top_cut: usize, entrants: usize },
}

/// Parameters for a single qualifying tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TournamentConfig {
    /// Number of players entered.
    pub entrants: usize,
    /// Maximum number of games each player may play.
    pub rounds: u32,
}

impl TournamentConfig {
    pub fn new(entrants: usize, rounds: u32) -> Self {
        Self { entrants, rounds }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entrants == 0 {
            return Err(ConfigError::NoEntrants);
        }
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        Ok(())
    }
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            entrants: 32,
            rounds: 5,
        }
    }
}

/// Parameters for a Monte Carlo run of repeated tournaments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialConfig {
    /// Number of players entered per tournament.
    pub entrants: usize,
    /// Maximum number of games each player may play.
    pub rounds: u32,
    /// Size of the top cut; the bubble is the record at this rank (1-indexed).
    pub top_cut: usize,
    /// Number of independent tournaments to simulate.
    pub trials: u64,
}

impl TrialConfig {
    /// The per-tournament slice of this configuration.
    pub fn tournament(&self) -> TournamentConfig {
        TournamentConfig::new(self.entrants, self.rounds)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tournament().validate()?;
        if self.top_cut < 1 || self.top_cut > self.entrants {
            return Err(ConfigError::TopCutOutOfRange {
                top_cut: self.top_cut,
                entrants: self.entrants,
            });
        }
        Ok(())
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            entrants: 32,
            rounds: 5,
            top_cut: 8,
            trials: 100,
        }
    }
}
