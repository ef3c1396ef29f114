//! Round state machine
//!
//! Idle -> Playing on start, Playing -> GameOver when the countdown runs out,
//! GameOver -> Idle -> Playing on restart. The countdown is driven by
//! wall-clock readings passed in by the caller, not by frame count.

use super::spawner::spawn_collectible;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Idle -> Playing. Returns false (and does nothing) from any other phase.
pub fn start_round(state: &mut GameState, now_ms: f64) -> bool {
    if state.phase != GamePhase::Idle {
        return false;
    }

    state.phase = GamePhase::Playing;
    state.seconds_remaining = state.round_seconds;
    state.last_timer_update_ms = now_ms;
    state.spawner.warm_up();
    for _ in 0..INITIAL_COLLECTIBLES {
        let c = spawn_collectible(state.bounds, &mut state.rng);
        state.collectibles.push(c);
    }

    log::info!(
        "Round started: {}s on the clock, spawn counter {}",
        state.seconds_remaining,
        state.spawner.frames_since_last_spawn
    );
    true
}

/// Clear the finished round and return to Idle
pub fn reset(state: &mut GameState) {
    state.score = 0;
    state.collectibles.clear();
    state.seconds_remaining = state.round_seconds;
    state.phase = GamePhase::Idle;
}

/// GameOver -> Idle -> Playing as a single action.
/// Returns false (and does nothing) unless the round is over.
pub fn restart(state: &mut GameState, now_ms: f64) -> bool {
    if state.phase != GamePhase::GameOver {
        return false;
    }
    reset(state);
    log::info!("Restarting");
    start_round(state, now_ms)
}

/// Step the countdown if a full second has passed since the last step.
/// Returns true when it stepped.
pub fn advance_timer(state: &mut GameState, now_ms: f64) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }
    if now_ms - state.last_timer_update_ms >= TIMER_STEP_MS {
        state.seconds_remaining -= 1;
        state.last_timer_update_ms = now_ms;
        return true;
    }
    false
}

/// Playing -> GameOver once the countdown is exhausted
pub fn check_game_over(state: &mut GameState) -> bool {
    if state.phase == GamePhase::Playing && state.seconds_remaining <= 0 {
        state.phase = GamePhase::GameOver;
        log::info!("Game over, final score {}", state.score);
        return true;
    }
    false
}
