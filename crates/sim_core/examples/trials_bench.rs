//! Trial-runner benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example trials_bench -p sim_core -- [entrants] [rounds] [cut] [trials]
//!
//! Examples:
//!   # Default: 10000 trials of a 128-player, 9-round qualifier, top 32 cut
//!   cargo flamegraph --example trials_bench -p sim_core
//!
//!   # A large field
//!   cargo flamegraph --example trials_bench -p sim_core -- 1024 9 128 20000

use std::env;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use sim_core::{TrialConfig, TrialRunner};

const SEED: u64 = 0xECC0;

fn main() {
    let args: Vec<String> = env::args().collect();

    let config = TrialConfig {
        entrants: args.get(1).and_then(|s| s.parse().ok()).unwrap_or(128),
        rounds: args.get(2).and_then(|s| s.parse().ok()).unwrap_or(9),
        top_cut: args.get(3).and_then(|s| s.parse().ok()).unwrap_or(32),
        trials: args.get(4).and_then(|s| s.parse().ok()).unwrap_or(10_000),
    };
    if let Err(error) = config.validate() {
        eprintln!("Invalid parameters: {error}");
        return;
    }

    println!("=== Trial Runner Benchmark ===");
    println!(
        "Entrants: {}, Rounds: {}, Cut: {}, Trials: {}",
        config.entrants, config.rounds, config.top_cut, config.trials
    );
    println!();

    let runner = TrialRunner::new(config);

    let start = Instant::now();
    let sequential = runner.run(&mut StdRng::seed_from_u64(SEED)).unwrap();
    let elapsed = start.elapsed();
    report("sequential", config.trials, elapsed);
    assert_eq!(sequential.values().sum::<u64>(), config.trials);

    let start = Instant::now();
    let parallel = runner.run_parallel(SEED).unwrap();
    let elapsed = start.elapsed();
    report("parallel", config.trials, elapsed);
    assert_eq!(parallel.values().sum::<u64>(), config.trials);
}

fn report(mode: &str, trials: u64, elapsed: std::time::Duration) {
    let per_sec = if elapsed.as_secs_f64() > 0.0 {
        trials as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };
    println!("{mode:<12} {trials:>8} trials in {elapsed:>8.3?} ({per_sec:>10.0} trials/s)");
}
