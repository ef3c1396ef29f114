//! Game state and core simulation types
//!
//! Everything a round mutates lives in [`GameState`]; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::spawner::Spawner;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the start action, simulation frozen
    Idle,
    /// Active round with the countdown running
    Playing,
    /// Countdown expired, final score on screen
    GameOver,
}

/// Visible canvas extent in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The player's boat
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Sprite center
    pub pos: Vec2,
    /// Sprite side length
    pub size: f32,
}

impl Player {
    /// Place the boat near the bottom middle of the canvas
    pub fn spawn(bounds: Bounds) -> Self {
        Self {
            pos: Vec2::new(bounds.width / 2.0, bounds.height - PLAYER_START_OFFSET),
            size: PLAYER_SIZE,
        }
    }
}

/// A piece of falling trash
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collectible {
    pub pos: Vec2,
    pub size: f32,
}

impl Collectible {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: COLLECTIBLE_SIZE,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub bounds: Bounds,
    pub phase: GamePhase,
    pub score: u32,
    /// Countdown value shown on the HUD
    pub seconds_remaining: i32,
    /// Countdown value restored by each round start
    pub round_seconds: i32,
    /// Clock reading at the last countdown step
    pub last_timer_update_ms: f64,
    pub spawner: Spawner,
    pub player: Player,
    /// Active collectibles, in spawn order
    pub collectibles: Vec<Collectible>,
    /// Gameplay RNG (spawn positions and intervals)
    pub rng: Pcg32,
}

impl GameState {
    /// Create an idle session with the given seed
    pub fn new(seed: u64, bounds: Bounds, round_seconds: i32) -> Self {
        Self {
            seed,
            bounds,
            phase: GamePhase::Idle,
            score: 0,
            seconds_remaining: round_seconds,
            round_seconds,
            last_timer_update_ms: 0.0,
            spawner: Spawner::default(),
            player: Player::spawn(bounds),
            collectibles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(1, Bounds::new(800.0, 600.0), ROUND_SECONDS);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.seconds_remaining, 60);
        assert!(state.collectibles.is_empty());
        assert_eq!(state.player.pos, Vec2::new(400.0, 500.0));
        assert_eq!(state.player.size, 60.0);
    }
}
