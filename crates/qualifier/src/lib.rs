//! Qualifier CLI and reporting
//!
//! This crate provides the presentation boundary around `sim_core`:
//! - Text reports over a single tournament (leaderboard, bubble statistics,
//!   drop counts)
//! - Monte Carlo trial reports as sorted text or JSON
//!
//! # Usage
//!
//! ```bash
//! # One tournament: 64 players, 6 rounds, top 16 cut
//! cargo run -p qualifier -- single --entrants 64 --rounds 6 --cut 16
//!
//! # 10000 trials of a 512-player, 8-round qualifier, top 64 cut
//! cargo run -p qualifier -- trials --entrants 512 --rounds 8 --cut 64 --trials 10000
//! ```

mod report;

pub use report::*;
