//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`

use duel_chess::engines::engine_greedy::GreedyEngine;
use duel_chess::engines::engine_random::RandomEngine;
use duel_chess::utils::engine_match_harness::{play_engine_match, MatchConfig, MatchOutcome};
use duel_chess::ChessError;

const GAMES: u64 = 10;
const BASE_SEED: u64 = 1234;

fn main() -> Result<(), ChessError> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");
    let config = MatchConfig {
        max_plies: 200,
        verbose,
    };

    let (mut greedy_wins, mut random_wins, mut draws) = (0u32, 0u32, 0u32);
    for i in 0..GAMES {
        let seed = BASE_SEED.wrapping_add(i);
        let mut greedy = GreedyEngine::with_seed(seed);
        let mut random = RandomEngine::with_seed(seed ^ 0xA5A5_5A5A);

        // Alternate colors each game.
        let greedy_is_white = i % 2 == 0;
        let result = if greedy_is_white {
            play_engine_match(&mut greedy, &mut random, &config)?
        } else {
            play_engine_match(&mut random, &mut greedy, &config)?
        };

        let white_won = matches!(
            result.outcome,
            MatchOutcome::WhiteWinCheckmate | MatchOutcome::WhiteWinResignation
        );
        let black_won = matches!(
            result.outcome,
            MatchOutcome::BlackWinCheckmate | MatchOutcome::BlackWinResignation
        );
        if (white_won && greedy_is_white) || (black_won && !greedy_is_white) {
            greedy_wins += 1;
        } else if white_won || black_won {
            random_wins += 1;
        } else {
            draws += 1;
        }

        println!(
            "[series] game {}/{} seed={} greedy_white={} result={:?} plies={}",
            i + 1,
            GAMES,
            seed,
            greedy_is_white,
            result.outcome,
            result.played_moves.len()
        );
    }

    println!("games={GAMES} greedy_wins={greedy_wins} random_wins={random_wins} draws={draws}");
    Ok(())
}
