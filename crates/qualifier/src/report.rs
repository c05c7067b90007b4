//! Pure formatters over simulation output.
//!
//! Nothing here feeds back into the simulation: every function consumes
//! ranked players or a finished frequency table and returns text.

use std::collections::BTreeMap;

use serde::Serialize;
use sim_core::{FrequencyTable, Player, TrialConfig};

/// Ranked records of the players who made the cut.
pub fn leaderboard(players: &[Player], top_cut: usize) -> String {
    let mut out = String::from("=== Leaderboard ===\n");
    for (rank, player) in players.iter().take(top_cut).enumerate() {
        out.push_str(&format!("{:>4}: {}\n", rank + 1, player));
    }
    out
}

/// How many of the players tied on the bubble win count landed inside the
/// cut.
pub fn top_cut_summary(players: &[Player], top_cut: usize) -> String {
    let bubble_wins = players[top_cut - 1].wins;
    let tied_in = players[..top_cut]
        .iter()
        .filter(|p| p.wins == bubble_wins)
        .count();
    let tied_total = players.iter().filter(|p| p.wins == bubble_wins).count();
    format!(
        "{tied_in} out of {tied_total} players with {bubble_wins} wins made the cut to top {top_cut}.\n"
    )
}

/// How many players dropped before completing their schedule.
///
/// Only counts genuine drops (a guaranteed losing record), not players
/// abandoned when the pool drained.
pub fn drop_summary(players: &[Player], rounds: u32) -> String {
    let drops = players
        .iter()
        .filter(|p| p.has_dropped(rounds) && p.games_played() < rounds)
        .count();
    format!(
        "{drops} players dropped before completing all of their games \
         because they were guaranteed to finish with a losing record.\n"
    )
}

/// Frequency table as text, most common record first; ties sort by record.
pub fn trials_table(table: &FrequencyTable) -> String {
    let mut rows: Vec<(&str, u64)> = table.iter().map(|(k, &v)| (k.as_str(), v)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let mut out = String::new();
    for (record, count) in rows {
        out.push_str(&format!("{record} was the cut off {count} times.\n"));
    }
    out
}

/// Print a full single-tournament report to stdout.
pub fn print_tournament_report(players: &[Player], top_cut: usize, rounds: u32) {
    println!("{}", leaderboard(players, top_cut));
    println!("{}", top_cut_summary(players, top_cut));
    println!("{}", drop_summary(players, rounds));
}

/// Print the trial frequency table to stdout.
pub fn print_trials_table(table: &FrequencyTable) {
    print!("{}", trials_table(table));
}

/// Machine-readable shape of a Monte Carlo run.
#[derive(Debug, Clone, Serialize)]
pub struct TrialsReport {
    pub entrants: usize,
    pub rounds: u32,
    pub top_cut: usize,
    pub trials: u64,
    pub seed: u64,
    /// Bubble record -> occurrence count, in stable key order.
    pub counts: BTreeMap<String, u64>,
}

impl TrialsReport {
    pub fn new(config: &TrialConfig, seed: u64, table: &FrequencyTable) -> Self {
        Self {
            entrants: config.entrants,
            rounds: config.rounds,
            top_cut: config.top_cut,
            trials: config.trials,
            seed,
            counts: table.iter().map(|(k, &v)| (k.clone(), v)).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked() -> Vec<Player> {
        vec![
            Player { wins: 3, losses: 0 },
            Player { wins: 2, losses: 1 },
            Player { wins: 2, losses: 1 },
            Player { wins: 2, losses: 0 },
            Player { wins: 1, losses: 2 },
            Player { wins: 0, losses: 2 },
        ]
    }

    #[test]
    fn leaderboard_lists_only_the_cut() {
        let text = leaderboard(&ranked(), 3);
        assert_eq!(text, "=== Leaderboard ===\n   1: 3-0\n   2: 2-1\n   3: 2-1\n");
    }

    #[test]
    fn top_cut_summary_counts_bubble_ties() {
        // bubble sits at rank 3 with 2 wins; three players share that win
        // total and two of them are inside the cut
        let text = top_cut_summary(&ranked(), 3);
        assert_eq!(text, "2 out of 3 players with 2 wins made the cut to top 3.\n");
    }

    #[test]
    fn drop_summary_ignores_starved_players() {
        // rounds = 3: only the 0-2 player dropped mid-schedule; 1-2 played
        // everything out, and the under-played 2-0 player never held a
        // losing-guaranteed record
        let text = drop_summary(&ranked(), 3);
        assert!(text.starts_with("1 players dropped"), "got: {text}");
    }

    #[test]
    fn trials_table_sorts_by_count_then_record() {
        let table = FrequencyTable::from([
            ("2-1".to_string(), 4),
            ("3-0".to_string(), 9),
            ("1-2".to_string(), 4),
        ]);
        let text = trials_table(&table);
        assert_eq!(
            text,
            "3-0 was the cut off 9 times.\n\
             1-2 was the cut off 4 times.\n\
             2-1 was the cut off 4 times.\n"
        );
    }

    #[test]
    fn trials_report_serializes_with_stable_keys() {
        let config = TrialConfig {
            entrants: 8,
            rounds: 3,
            top_cut: 4,
            trials: 50,
        };
        let table = FrequencyTable::from([("2-1".to_string(), 30), ("1-1".to_string(), 20)]);
        let report = TrialsReport::new(&config, 7, &table);

        let json = report.to_json().unwrap();
        assert!(json.contains("\"seed\": 7"));
        assert!(json.contains("\"trials\": 50"));
        // BTreeMap ordering puts 1-1 before 2-1
        assert!(json.find("1-1").unwrap() < json.find("2-1").unwrap());
    }
}
