//! Pickup detection
//!
//! Sprites are squares, but pickups use a circle approximation: two sprites
//! touch when their centers are closer than the sum of their half-sizes.

use glam::Vec2;

use super::state::{Collectible, Player};

/// Circle-approximation overlap between two square sprites
#[inline]
pub fn overlaps(a: Vec2, a_size: f32, b: Vec2, b_size: f32) -> bool {
    a.distance(b) < a_size / 2.0 + b_size / 2.0
}

/// Whether the boat picks up this collectible
pub fn collects(player: &Player, collectible: &Collectible) -> bool {
    overlaps(player.pos, player.size, collectible.pos, collectible.size)
}

/// Remove every collectible the boat overlaps, returning how many were taken.
///
/// Walks the set back to front so removal never shifts an unvisited entry.
pub fn collect_overlapping(player: &Player, collectibles: &mut Vec<Collectible>) -> u32 {
    let mut collected = 0;
    for i in (0..collectibles.len()).rev() {
        if collects(player, &collectibles[i]) {
            collectibles.remove(i);
            collected += 1;
        }
    }
    collected
}
