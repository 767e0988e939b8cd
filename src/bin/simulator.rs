//! Prospector Headless Session Simulator
//!
//! Plays whole sessions without any UI, using the exact same `Session`
//! API as the real game, and reports win/loss statistics for balance
//! analysis.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N      Sessions to play with incrementing seeds (default: 100)
//!   --seed N      Base RNG seed (default: 42)
//!   --mode M      easy | normal | hard | test | samurai (default: normal)
//!   --max-turns N Turn cap per session (default: 500)
//!   --verbose     Per-turn command and outcome logging

use prospector::items::Item;
use prospector::outcome::Command;
use prospector::session::{GameMode, Session, SessionPhase};
use rand::rngs::StdRng;
use rand::SeedableRng;

struct SimConfig {
    runs: u64,
    seed: u64,
    mode: GameMode,
    max_turns: u32,
    verbose: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 100,
            seed: 42,
            mode: GameMode::Normal,
            max_turns: 500,
            verbose: false,
        }
    }
}

fn parse_args() -> SimConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                config.runs = args[i].parse().expect("--runs requires a number");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("--seed requires a number");
            }
            "--mode" => {
                i += 1;
                config.mode = GameMode::parse(&args[i]).expect("--mode requires a known mode");
            }
            "--max-turns" => {
                i += 1;
                config.max_turns = args[i].parse().expect("--max-turns requires a number");
            }
            "--verbose" => config.verbose = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    config
}

fn print_usage() {
    println!("Prospector headless session simulator\n");
    println!("Usage: cargo run --bin simulator -- [OPTIONS]\n");
    println!("Options:");
    println!("  --runs N       Sessions to play with incrementing seeds (default: 100)");
    println!("  --seed N       Base RNG seed (default: 42)");
    println!("  --mode M       easy | normal | hard | test | samurai (default: normal)");
    println!("  --max-turns N  Turn cap per session (default: 500)");
    println!("  --verbose      Per-turn command and outcome logging");
}

/// How one simulated session ended.
enum SimResult {
    Won(u32),
    Lost(u32),
    TurnCap,
}

/// A simple scripted hunter: hunt the town's treasure, gear up for the
/// crossing, dig when broke, brawl as a last resort, and keep moving.
fn next_command(session: &Session) -> Command {
    let town = session.town();
    let hunter = session.hunter();

    if !town.searched {
        return Command::Hunt;
    }

    let needed = town.terrain.required_item();
    if !hunter.kit.has(needed) {
        if session.free_gold() || hunter.gold() >= needed.base_cost() {
            return Command::Buy(needed);
        }
        if hunter.kit.has(Item::Shovel) && !hunter.has_dug_this_town() {
            return Command::Dig;
        }
        return Command::Trouble;
    }

    Command::Move
}

fn run_session(config: &SimConfig, seed: u64) -> SimResult {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = Session::new(format!("sim-{seed}"), 20, config.mode, &mut rng);

    for turn in 1..=config.max_turns {
        let command = next_command(&session);
        let outcome = session.process_command(command, &mut rng);
        if config.verbose {
            println!("[seed {seed}] turn {turn}: {command:?} -> {outcome:?}");
        }
        match session.phase() {
            SessionPhase::Playing => {}
            SessionPhase::Won => return SimResult::Won(turn),
            SessionPhase::Lost => return SimResult::Lost(turn),
            SessionPhase::Quit => unreachable!("the bot never quits"),
        }
    }
    SimResult::TurnCap
}

fn main() {
    let config = parse_args();

    let mut wins = 0u64;
    let mut losses = 0u64;
    let mut capped = 0u64;
    let mut win_turns = 0u64;
    let mut loss_turns = 0u64;

    for run in 0..config.runs {
        match run_session(&config, config.seed + run) {
            SimResult::Won(turns) => {
                wins += 1;
                win_turns += turns as u64;
            }
            SimResult::Lost(turns) => {
                losses += 1;
                loss_turns += turns as u64;
            }
            SimResult::TurnCap => capped += 1,
        }
    }

    println!(
        "mode={} runs={} wins={} losses={} turn-capped={}",
        config.mode.name(),
        config.runs,
        wins,
        losses,
        capped
    );
    if wins > 0 {
        println!("avg turns to win:  {:.1}", win_turns as f64 / wins as f64);
    }
    if losses > 0 {
        println!("avg turns to lose: {:.1}", loss_turns as f64 / losses as f64);
    }
}
