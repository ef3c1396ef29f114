//! Simulation tick
//!
//! One frame of play: move the boat, drift and collect trash, run the
//! spawner, step the countdown, then check for the end of the round.

use glam::Vec2;

use super::collision::collect_overlapping;
use super::movement::{move_collectible, move_player};
use super::session::{advance_timer, check_game_over};
use super::spawner::spawn_collectible;
use super::state::GameState;

/// Input sampled once per tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// First active touch/pointer position, in canvas pixels
    pub pointer: Option<Vec2>,
    /// Held arrow keys
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub collected: u32,
    pub spawned: bool,
    pub timer_stepped: bool,
    pub game_over: bool,
}

/// Advance the round by one frame. Does nothing unless Playing.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) -> TickEvents {
    let mut events = TickEvents::default();
    if !state.is_playing() {
        return events;
    }

    state.player = move_player(state.player, input, state.bounds);

    // Back to front, matching the order pickups are resolved in
    for c in state.collectibles.iter_mut().rev() {
        *c = move_collectible(*c, state.bounds, &mut state.rng);
    }
    events.collected = collect_overlapping(&state.player, &mut state.collectibles);
    state.score += events.collected;
    if events.collected > 0 {
        log::debug!("Collected {} (score {})", events.collected, state.score);
    }

    if state.spawner.step(&mut state.rng) {
        let c = spawn_collectible(state.bounds, &mut state.rng);
        state.collectibles.push(c);
        events.spawned = true;
        log::debug!(
            "Spawned at ({:.0}, {:.0}), next in {} frames",
            c.pos.x,
            c.pos.y,
            state.spawner.interval_frames
        );
    }

    events.timer_stepped = advance_timer(state, now_ms);
    events.game_over = check_game_over(state);
    events
}
