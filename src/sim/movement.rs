//! Entity movement rules
//!
//! Pure functions: they take an entity by value and return the moved copy,
//! so they can be tested without any rendering context.

use glam::Vec2;
use rand::Rng;

use super::state::{Bounds, Collectible, Player};
use super::tick::TickInput;
use crate::consts::*;

/// Advance the player by one tick of input
///
/// A pointer/touch position wins outright. Otherwise each held arrow moves
/// the boat by `PLAYER_SPEED`, but only while it is inside the playable band
/// for that axis, and never past the band's edge.
pub fn move_player(player: Player, input: &TickInput, bounds: Bounds) -> Player {
    if let Some(pointer) = input.pointer {
        return Player {
            pos: pointer,
            ..player
        };
    }

    let max = Vec2::new(
        bounds.width - player.size - EDGE_MARGIN,
        bounds.height - player.size - EDGE_MARGIN,
    );
    let mut pos = player.pos;

    if input.left && pos.x > EDGE_MARGIN {
        pos.x = (pos.x - PLAYER_SPEED).max(EDGE_MARGIN);
    }
    if input.right && pos.x < max.x {
        pos.x = (pos.x + PLAYER_SPEED).min(max.x);
    }
    if input.up && pos.y > EDGE_MARGIN {
        pos.y = (pos.y - PLAYER_SPEED).max(EDGE_MARGIN);
    }
    if input.down && pos.y < max.y {
        pos.y = (pos.y + PLAYER_SPEED).min(max.y);
    }

    Player { pos, ..player }
}

/// Drift a collectible down one tick, wrapping it above the canvas once it
/// falls past the bottom edge
pub fn move_collectible<R: Rng>(collectible: Collectible, bounds: Bounds, rng: &mut R) -> Collectible {
    let mut pos = collectible.pos;
    pos.y += SCROLL_SPEED;
    if pos.y > bounds.height {
        pos = above_screen(bounds, rng);
    }
    Collectible { pos, ..collectible }
}

/// Random position with x on screen and y in the band above it
pub fn above_screen<R: Rng>(bounds: Bounds, rng: &mut R) -> Vec2 {
    let y = rng.random_range(-bounds.height..0.0);
    let x = rng.random_range(0.0..bounds.width);
    Vec2::new(x, y)
}
