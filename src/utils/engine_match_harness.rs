//! Minimal head-to-head engine match harness.
//!
//! Runs two `Engine` implementations against each other from a given state
//! until the game reaches a terminal status or the ply cap is hit.

use std::time::Instant;

use crate::engines::engine_trait::Engine;
use crate::errors::ChessError;
use crate::game_state::chess_types::{Move, Player};
use crate::game_state::game_state::{initial_state, GameState, Status};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::utils::algebraic::position_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    WhiteWinResignation,
    BlackWinResignation,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves: Vec<Move>,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

/// Play a match from the standard starting position.
pub fn play_engine_match<'a>(
    engine_white: &mut (dyn Engine + 'a),
    engine_black: &mut (dyn Engine + 'a),
    config: &MatchConfig,
) -> Result<MatchResult, ChessError> {
    play_engine_match_from_state(initial_state(), engine_white, engine_black, config)
}

/// Both engines share one trait-object lifetime so the mover can be picked
/// through a single `&mut dyn Engine` each ply.
pub fn play_engine_match_from_state<'a>(
    mut state: GameState,
    engine_white: &mut (dyn Engine + 'a),
    engine_black: &mut (dyn Engine + 'a),
    config: &MatchConfig,
) -> Result<MatchResult, ChessError> {
    engine_white.new_game();
    engine_black.new_game();

    let mut played_moves = Vec::<Move>::new();
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    for ply in 0..config.max_plies {
        if let Some(outcome) = terminal_outcome(&state.status) {
            return Ok(MatchResult {
                outcome,
                final_state: state,
                played_moves,
                white_total_time_ns,
                black_total_time_ns,
            });
        }

        let mover = state.turn;
        let engine = match mover {
            Player::White => &mut *engine_white,
            Player::Black => &mut *engine_black,
        };

        let started = Instant::now();
        let out = engine.choose_move(&state)?;
        let elapsed_ns = started.elapsed().as_nanos();
        match mover {
            Player::White => white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns),
            Player::Black => black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns),
        }

        let chosen = out.best_move.ok_or_else(|| {
            ChessError::EngineFailure(format!(
                "{} returned no move in a live position",
                engine.name()
            ))
        })?;
        if !legal_moves(&state, chosen.from).contains(&chosen.to) {
            return Err(ChessError::EngineFailure(format!(
                "{} returned illegal move {}{}",
                engine.name(),
                position_to_algebraic(chosen.from),
                position_to_algebraic(chosen.to)
            )));
        }

        if config.verbose {
            for line in &out.info_lines {
                println!("[match] ply {} {line}", ply + 1);
            }
            println!(
                "[match] ply {} {mover} plays {}{}",
                ply + 1,
                position_to_algebraic(chosen.from),
                position_to_algebraic(chosen.to)
            );
        }

        played_moves.push(chosen);
        state = apply_move(&state, chosen.from, chosen.to);
    }

    let outcome = terminal_outcome(&state.status).unwrap_or(MatchOutcome::DrawMaxPlies);
    Ok(MatchResult {
        outcome,
        final_state: state,
        played_moves,
        white_total_time_ns,
        black_total_time_ns,
    })
}

fn terminal_outcome(status: &Status) -> Option<MatchOutcome> {
    match status {
        Status::Checkmate { winner } => Some(match winner {
            Player::White => MatchOutcome::WhiteWinCheckmate,
            Player::Black => MatchOutcome::BlackWinCheckmate,
        }),
        Status::Resigned { winner } => Some(match winner {
            Player::White => MatchOutcome::WhiteWinResignation,
            Player::Black => MatchOutcome::BlackWinResignation,
        }),
        Status::Stalemate => Some(MatchOutcome::DrawStalemate),
        Status::Normal { .. } | Status::Check { .. } => None,
    }
}
