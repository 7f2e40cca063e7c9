//! Self-play driver: the greedy selector against itself (or a random mover)
//! from the standard starting position.
//!
//! Run with:
//! `cargo run --release -- --seed 7 --max-plies 200 --verbose`
//! `cargo run --release -- --vs-random`

use duel_chess::engines::engine_greedy::GreedyEngine;
use duel_chess::engines::engine_random::RandomEngine;
use duel_chess::engines::engine_trait::Engine;
use duel_chess::utils::engine_match_harness::{play_engine_match, MatchConfig};
use duel_chess::utils::render_game_state::render_game_state;
use duel_chess::ChessError;

fn flag_value(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1).cloned())
}

fn main() -> Result<(), ChessError> {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let vs_random = args.iter().any(|a| a == "--vs-random");

    let seed = flag_value(&args, "--seed");
    let max_plies = match flag_value(&args, "--max-plies") {
        Some(v) => v
            .trim()
            .parse::<u16>()
            .map_err(|_| ChessError::EngineFailure(format!("invalid --max-plies value '{v}'")))?,
        None => MatchConfig::default().max_plies,
    };

    let mut white = GreedyEngine::new();
    let mut black: Box<dyn Engine> = if vs_random {
        Box::new(RandomEngine::new())
    } else {
        Box::new(GreedyEngine::new())
    };

    if let Some(seed) = &seed {
        white.set_option("Seed", seed)?;
        // Black plays with seed + 1.
        let black_seed = seed
            .trim()
            .parse::<u64>()
            .map(|s| s.wrapping_add(1).to_string())
            .unwrap_or_else(|_| seed.clone());
        black.set_option("Seed", &black_seed)?;
    }

    println!("[duel] white={} black={}", white.name(), black.name());
    let result = play_engine_match(
        &mut white,
        black.as_mut(),
        &MatchConfig { max_plies, verbose },
    )?;

    println!("{}", render_game_state(&result.final_state));
    println!("fen: {}", result.final_state.get_fen());
    println!(
        "[duel] outcome={:?} plies={} white_ms={:.3} black_ms={:.3}",
        result.outcome,
        result.played_moves.len(),
        result.white_total_time_ns as f64 / 1_000_000.0,
        result.black_total_time_ns as f64 / 1_000_000.0
    );
    Ok(())
}
