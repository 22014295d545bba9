//! Balance simulator CLI.
//!
//! Runs Monte Carlo batches against the reward engine to check rarity
//! distributions, cast outcome bands, and yield curves.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # 100k fishing casts
//!   cargo run --bin simulate -- -n 50000 --seed 42 # reproducible batch
//!   cargo run --bin simulate -- --egg legendary    # hatch simulation
//!   cargo run --bin simulate -- --json             # also write a JSON report

use std::env;
use std::process;

use tidepool::build_info;
use tidepool::eggs::EggGrade;
use tidepool::simulator::{run_simulation, SimConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    if config.verbosity > 0 {
        println!("╔═══════════════════════════════════════════════════════════╗");
        println!("║              TIDEPOOL BALANCE SIMULATOR                   ║");
        println!("╚═══════════════════════════════════════════════════════════╝");
        println!();
        println!(
            "Build: {} ({})",
            build_info::BUILD_COMMIT,
            build_info::BUILD_DATE
        );
        println!("Mode:   {}", config.mode_label());
        println!("Trials: {}", config.trials);
        if let Some(seed) = config.seed {
            println!("Seed:   {seed}");
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report written to {filename}"),
            Err(e) => eprintln!("Could not write {filename}: {e}"),
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--trials" => {
                i += 1;
                config.trials = expect_value(args, i, "--trials");
            }
            "--seed" => {
                i += 1;
                config.seed = Some(expect_value(args, i, "--seed"));
            }
            "--egg" => {
                i += 1;
                let name = args.get(i).map(String::as_str).unwrap_or_default();
                config.egg_grade = Some(parse_grade(name).unwrap_or_else(|| {
                    eprintln!("Unknown egg grade '{name}'");
                    eprintln!("Expected one of: common, rare, epic, legendary, transcendent");
                    process::exit(2);
                }));
            }
            "-q" | "--quiet" => config.verbosity = 0,
            "-v" | "--verbose" => config.verbosity = 2,
            "--json" => {} // handled after the run
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown option '{other}' (try --help)");
                process::exit(2);
            }
        }
        i += 1;
    }

    config
}

fn expect_value<T: std::str::FromStr>(args: &[String], index: usize, flag: &str) -> T {
    args.get(index)
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| {
            eprintln!("{flag} expects a numeric value");
            process::exit(2);
        })
}

fn parse_grade(name: &str) -> Option<EggGrade> {
    match name.to_ascii_lowercase().as_str() {
        "common" => Some(EggGrade::Common),
        "rare" => Some(EggGrade::Rare),
        "epic" => Some(EggGrade::Epic),
        "legendary" => Some(EggGrade::Legendary),
        "transcendent" => Some(EggGrade::Transcendent),
        _ => None,
    }
}

fn print_help() {
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --trials N   Number of trials (default 100000)");
    println!("      --seed N     Seed the RNG for a reproducible batch");
    println!("      --egg GRADE  Simulate hatching: common|rare|epic|legendary|transcendent");
    println!("      --json       Also write the report as JSON");
    println!("  -q, --quiet      Skip the banner");
    println!("  -v, --verbose    Extra chatter");
    println!("  -h, --help       This text");
}
