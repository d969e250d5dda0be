//! Headless autopilot CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 100 runs, random seed
//!   cargo run --bin simulate -- --runs 10 --seed 42
//!   cargo run --bin simulate -- --lookahead 45 --quiet

use anyhow::{bail, Context, Result};
use ridge_runner::logging;
use ridge_runner::simulator::{run_simulation, SimConfig};
use ridge_runner::RunnerConfig;
use std::path::PathBuf;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let Some(config) = parse_args(&args)? else {
        return Ok(());
    };

    logging::init_stderr("warn").context("failed to install logger")?;

    if config.verbosity > 0 {
        println!("Configuration:");
        println!("  Runs:           {}", config.num_runs);
        println!("  Max time/run:   {}ms", config.max_ms_per_run);
        println!("  Look-ahead:     {}", config.lookahead);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
    }

    let report = run_simulation(&config);

    if config.verbosity > 0 {
        for run in &report.runs {
            println!(
                "  seed {:>20}  score {:>6}  jumps {:>4}  {}",
                run.seed,
                run.score,
                run.jumps,
                if run.crashed { "crashed" } else { "timed out" }
            );
        }
        println!();
    }

    println!("{}", report.to_text());
    Ok(())
}

fn parse_args(args: &[String]) -> Result<Option<SimConfig>> {
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" | "-n" => {
                i += 1;
                config.num_runs = next_number(args, i, "--runs")?;
            }
            "--seed" => {
                i += 1;
                config.seed = Some(next_number(args, i, "--seed")?);
            }
            "--max-ms" => {
                i += 1;
                config.max_ms_per_run = next_number(args, i, "--max-ms")?;
            }
            "--lookahead" => {
                i += 1;
                config.lookahead = next_number(args, i, "--lookahead")?;
            }
            "--config" => {
                i += 1;
                let path = PathBuf::from(args.get(i).context("--config requires a file")?);
                config.runner = RunnerConfig::load(&path)
                    .with_context(|| format!("failed to load config from {}", path.display()))?;
            }
            "--time-scaled" => config.runner.time_scaled_physics = true,
            "--quiet" | "-q" => config.verbosity = 0,
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            other => {
                print_usage();
                bail!("unknown argument: {}", other);
            }
        }
        i += 1;
    }
    Ok(Some(config))
}

fn next_number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let value = args
        .get(i)
        .with_context(|| format!("{} requires a number", flag))?;
    match value.parse() {
        Ok(n) => Ok(n),
        Err(_) => bail!("{}: not a number: {}", flag, value),
    }
}

fn print_usage() {
    eprintln!(
        "Ridge Runner Autopilot Simulator\n\
         \n\
         Usage: simulate [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs, -n N     Number of runs with incrementing seeds (default: 100)\n\
         \x20 --seed N         Base RNG seed (default: random)\n\
         \x20 --max-ms N       Game time cap per run (default: 120000)\n\
         \x20 --lookahead X    Jump when an obstacle is this close (default: 60)\n\
         \x20 --config FILE    Load game settings from a JSON file\n\
         \x20 --time-scaled    Scale physics by elapsed time\n\
         \x20 --quiet, -q      Only the final summary\n\
         \x20 --help, -h       Show this help"
    );
}
