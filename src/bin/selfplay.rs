//! Self-play game generation CLI.
//!
//! Plays Hap games engine-vs-engine and outputs game records as JSONL.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N         Number of games to play (default: 10)
//!   --rows N          Board rows (default: 4)
//!   --cols N          Board columns (default: 5)
//!   --poison N        Poisoned cell count (default: 2)
//!   --depth N         Search depth (default: 5)
//!   --strategy NAME   minimax or alphabeta (default: alphabeta)
//!   --random-opening  Play the first ply of each game at random
//!   --threads N       Number of parallel threads (default: 4)
//!   --seed N          Random seed, 0 for entropy (default: 0)
//!   --output FILE     Output file path (default: stdout)
//!   --quiet           Suppress summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Instant;

use hap::search::Strategy;
use hap::selfplay::{self, SelfPlayConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = args[i].parse().expect("invalid --games value");
            }
            "--rows" => {
                i += 1;
                config.rows = args[i].parse().expect("invalid --rows value");
            }
            "--cols" => {
                i += 1;
                config.cols = args[i].parse().expect("invalid --cols value");
            }
            "--poison" => {
                i += 1;
                config.poison = args[i].parse().expect("invalid --poison value");
            }
            "--depth" => {
                i += 1;
                config.depth = args[i].parse().expect("invalid --depth value");
            }
            "--strategy" => {
                i += 1;
                config.strategy =
                    Strategy::from_name(&args[i]).expect("invalid --strategy value");
            }
            "--random-opening" => {
                config.random_opening = true;
            }
            "--threads" => {
                i += 1;
                config.threads = args[i].parse().expect("invalid --threads value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if !config.quiet {
        eprintln!(
            "Self-play: {} games, {}x{} board, {} poison, {} depth {}, {} threads",
            config.num_games,
            config.rows,
            config.cols,
            config.poison,
            config.strategy,
            config.depth,
            config.threads
        );
    }

    let start = Instant::now();
    let games = selfplay::run_self_play(&config);
    let elapsed = start.elapsed();

    if !config.quiet {
        eprintln!(
            "Completed {} games in {:.1}s",
            games.len(),
            elapsed.as_secs_f64()
        );
        selfplay::print_summary(&games);
    }

    match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            let mut writer = BufWriter::new(file);
            selfplay::write_jsonl(&games, &mut writer).expect("failed to write output");
            if !config.quiet {
                eprintln!("Wrote {} games to {}", games.len(), path);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&games, &mut writer).expect("failed to write output");
        }
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N         Number of games to play (default: 10)");
    eprintln!("  --rows N          Board rows (default: 4)");
    eprintln!("  --cols N          Board columns (default: 5)");
    eprintln!("  --poison N        Poisoned cell count (default: 2)");
    eprintln!("  --depth N         Search depth (default: 5)");
    eprintln!("  --strategy NAME   minimax or alphabeta (default: alphabeta)");
    eprintln!("  --random-opening  Play the first ply of each game at random");
    eprintln!("  --threads N       Number of parallel threads (default: 4)");
    eprintln!("  --seed N          Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE     Output file path (default: stdout)");
    eprintln!("  --quiet           Suppress summary output");
    eprintln!("  --help            Show this help");
}
