//! Qualifier CLI
//!
//! Simulate one qualifying tournament, or a Monte Carlo batch of them with a
//! tally of the record landing on the top-cut bubble.

use std::env;
use std::fmt::Display;
use std::process::exit;
use std::str::FromStr;

use qualifier::{print_tournament_report, print_trials_table, TrialsReport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use sim_core::{simulate_tournament, TrialConfig, TrialRunner};

fn print_usage() {
    println!("Qualifier Simulator");
    println!();
    println!("Usage:");
    println!("  qualifier single --entrants N --rounds R --cut C [--seed S]");
    println!("  qualifier trials --entrants N --rounds R --cut C [--trials T] [--seed S]");
    println!("                   [--sequential] [--json]");
    println!("  qualifier trials --config run.toml");
    println!();
    println!("Options:");
    println!("  --entrants, -e   Number of tournament participants");
    println!("  --rounds, -r     Maximum games per participant");
    println!("  --cut, -c        Number of players making the top cut");
    println!("  --trials, -t     Number of simulated tournaments (default 100)");
    println!("  --seed, -s       RNG seed (drawn from entropy when omitted)");
    println!("  --config         TOML file with the same parameters; flags win");
    println!("  --sequential     Run trials on a single thread");
    println!("  --json           Emit the trial report as JSON");
    println!();
    println!("Examples:");
    println!("  qualifier single --entrants 64 --rounds 6 --cut 16");
    println!("  qualifier trials -e 512 -r 8 -c 64 -t 10000 --seed 7");
}

/// Run parameters loaded from a `--config` TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RunFile {
    entrants: Option<usize>,
    rounds: Option<u32>,
    top_cut: Option<usize>,
    trials: Option<u64>,
    seed: Option<u64>,
}

impl RunFile {
    fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read {path}: {e}"))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse {path}: {e}"))
    }
}

/// Command-line flags shared by both subcommands.
#[derive(Debug, Default)]
struct Flags {
    entrants: Option<usize>,
    rounds: Option<u32>,
    top_cut: Option<usize>,
    trials: Option<u64>,
    seed: Option<u64>,
    config: Option<String>,
    json: bool,
    sequential: bool,
}

fn parse_flags(args: &[String]) -> Result<Flags, String> {
    let mut flags = Flags::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--entrants" | "-e" => flags.entrants = Some(parse_value(args, &mut i)?),
            "--rounds" | "-r" => flags.rounds = Some(parse_value(args, &mut i)?),
            "--cut" | "-c" => flags.top_cut = Some(parse_value(args, &mut i)?),
            "--trials" | "-t" => flags.trials = Some(parse_value(args, &mut i)?),
            "--seed" | "-s" => flags.seed = Some(parse_value(args, &mut i)?),
            "--config" => flags.config = Some(parse_value(args, &mut i)?),
            "--json" => flags.json = true,
            "--sequential" => flags.sequential = true,
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(flags)
}

fn parse_value<T: FromStr>(args: &[String], i: &mut usize) -> Result<T, String>
where
    T::Err: Display,
{
    let flag = args[*i].clone();
    *i += 1;
    let value = args
        .get(*i)
        .ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map_err(|e| format!("Invalid value for {flag}: {e}"))
}

/// Merge flags over an optional run file (flags take precedence) into a
/// validated configuration plus the seed, if one was given.
fn resolve(flags: &Flags) -> Result<(TrialConfig, Option<u64>), String> {
    let file = match &flags.config {
        Some(path) => RunFile::load(path)?,
        None => RunFile::default(),
    };

    let config = TrialConfig {
        entrants: flags
            .entrants
            .or(file.entrants)
            .ok_or("missing required parameter --entrants")?,
        rounds: flags
            .rounds
            .or(file.rounds)
            .ok_or("missing required parameter --rounds")?,
        top_cut: flags
            .top_cut
            .or(file.top_cut)
            .ok_or("missing required parameter --cut")?,
        trials: flags.trials.or(file.trials).unwrap_or(100),
    };
    config.validate().map_err(|e| e.to_string())?;
    Ok((config, flags.seed.or(file.seed)))
}

fn run_single(args: &[String]) -> Result<(), String> {
    let flags = parse_flags(args)?;
    let (config, seed) = resolve(&flags)?;
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());

    println!(
        "=== Qualifier: {} entrants, {} rounds, top {} ===",
        config.entrants, config.rounds, config.top_cut
    );
    println!("Seed: {seed}");
    println!();

    let mut rng = StdRng::seed_from_u64(seed);
    let players =
        simulate_tournament(config.entrants, config.rounds, &mut rng).map_err(|e| e.to_string())?;
    print_tournament_report(&players, config.top_cut, config.rounds);
    Ok(())
}

fn run_trials(args: &[String]) -> Result<(), String> {
    let flags = parse_flags(args)?;
    let (config, seed) = resolve(&flags)?;
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());

    let runner = TrialRunner::new(config);
    let table = if flags.sequential {
        runner.run(&mut StdRng::seed_from_u64(seed))
    } else {
        runner.run_parallel(seed)
    }
    .map_err(|e| e.to_string())?;

    if flags.json {
        let report = TrialsReport::new(&config, seed, &table);
        println!("{}", report.to_json().map_err(|e| e.to_string())?);
    } else {
        println!(
            "=== Trials: {} entrants, {} rounds, top {} ===",
            config.entrants, config.rounds, config.top_cut
        );
        println!("Trials: {}, Seed: {seed}", config.trials);
        println!();
        print_trials_table(&table);
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let outcome = match args[1].as_str() {
        "single" => run_single(&args[2..]),
        "trials" => run_trials(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        other => Err(format!("Unknown command: {other}")),
    };

    if let Err(error) = outcome {
        eprintln!("Error: {error}");
        print_usage();
        exit(1);
    }
}
