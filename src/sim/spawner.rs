//! Collectible spawn scheduling
//!
//! A frame counter races a randomized interval; each time it catches up one
//! collectible is spawned and a fresh interval is drawn.

use glam::Vec2;
use rand::Rng;

use super::state::{Bounds, Collectible};
use crate::consts::*;

/// Spawn timing state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawner {
    /// Frames to wait between timed spawns
    pub interval_frames: i32,
    /// Frames counted since the last timed spawn (negative during warm-up)
    pub frames_since_last_spawn: i32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            interval_frames: INITIAL_SPAWN_INTERVAL,
            frames_since_last_spawn: 0,
        }
    }
}

impl Spawner {
    /// Bias the counter at round start so the first timed spawn is delayed.
    ///
    /// `interval - 60` is kept as is, even though it lands anywhere from
    /// -55 to -30 depending on the current interval.
    pub fn warm_up(&mut self) {
        self.frames_since_last_spawn = self.interval_frames - SPAWN_WARM_UP;
    }

    /// Advance one frame. Returns true when a collectible is due this frame.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> bool {
        let due = self.frames_since_last_spawn >= self.interval_frames;
        if due {
            self.frames_since_last_spawn = 0;
            self.interval_frames = rng.random_range(SPAWN_INTERVAL_MIN..SPAWN_INTERVAL_MAX);
        }
        self.frames_since_last_spawn += 1;
        due
    }
}

/// A new collectible somewhere across the top, above the visible area
pub fn spawn_collectible<R: Rng>(bounds: Bounds, rng: &mut R) -> Collectible {
    let x = rng.random_range(0.0..bounds.width);
    let y = rng.random_range(-bounds.height..0.0);
    Collectible::new(Vec2::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_warm_up_offset() {
        let mut spawner = Spawner::default();
        spawner.warm_up();
        assert_eq!(spawner.frames_since_last_spawn, 30 - 60);

        spawner.interval_frames = 12;
        spawner.warm_up();
        assert_eq!(spawner.frames_since_last_spawn, -48);
    }

    #[test]
    fn test_first_timed_spawn_after_warm_up() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut spawner = Spawner::default();
        spawner.warm_up();

        // Counter climbs from -30 to 30 before the first spawn is due
        let frames_until_due = (0..200).position(|_| spawner.step(&mut rng)).unwrap();
        assert_eq!(frames_until_due, 60);
        assert_eq!(spawner.frames_since_last_spawn, 1);
    }

    #[test]
    fn test_redrawn_interval_in_range() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut spawner = Spawner {
            interval_frames: 0,
            frames_since_last_spawn: 0,
        };
        for _ in 0..500 {
            if spawner.step(&mut rng) {
                assert!((5..20).contains(&spawner.interval_frames));
            }
        }
    }

    #[test]
    fn test_spawns_at_cadence() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut spawner = Spawner {
            interval_frames: 5,
            frames_since_last_spawn: 5,
        };
        assert!(spawner.step(&mut rng));
        let next = spawner.interval_frames;
        // Counter is 1 after the spawn frame; due again once it reaches `next`
        let gap = (0..100).position(|_| spawner.step(&mut rng)).unwrap();
        assert_eq!(gap as i32, next - 1);
    }

    #[test]
    fn test_spawned_above_screen() {
        let mut rng = Pcg32::seed_from_u64(9);
        let bounds = Bounds::new(320.0, 240.0);
        for _ in 0..100 {
            let c = spawn_collectible(bounds, &mut rng);
            assert!(c.pos.x >= 0.0 && c.pos.x < 320.0);
            assert!(c.pos.y >= -240.0 && c.pos.y < 0.0);
            assert_eq!(c.size, COLLECTIBLE_SIZE);
        }
    }
}
