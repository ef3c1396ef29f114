//! Demo steering
//!
//! Plays the game through the same arrow-key input a person would use:
//! chase the lowest on-screen collectible, since it leaves soonest.

use super::state::GameState;
use super::tick::TickInput;
use crate::consts::PLAYER_SPEED;

/// Build this tick's input for the autopilot
pub fn steer(state: &GameState) -> TickInput {
    let player = state.player.pos;

    let target = state
        .collectibles
        .iter()
        .filter(|c| c.pos.y >= 0.0)
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(target) = target else {
        return TickInput::default();
    };

    // Dead zone of one step keeps the boat from jittering over the target
    let delta = target.pos - player;
    TickInput {
        pointer: None,
        left: delta.x < -PLAYER_SPEED,
        right: delta.x > PLAYER_SPEED,
        up: delta.y < -PLAYER_SPEED,
        down: delta.y > PLAYER_SPEED,
    }
}
