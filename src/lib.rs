//! Trash Boat - steer a boat, scoop up falling trash, beat the clock
//!
//! Core modules:
//! - `sim`: Simulation (entities, spawning, collisions, round state machine)
//! - `field`: Procedural background shading
//! - `canvas`: Drawing surface seam and software compositor
//! - `renderer`: WebGPU presentation of composited frames
//! - `platform`: Clock, start control and input seams supplied by the host
//! - `game`: Per-tick frame orchestration

pub mod canvas;
pub mod error;
pub mod field;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{AssetError, ConfigError};
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Target frame rate requested from the host
    pub const TICK_RATE: u32 = 30;
    /// Round length in seconds
    pub const ROUND_SECONDS: i32 = 60;
    /// Wall-clock milliseconds per countdown step
    pub const TIMER_STEP_MS: f64 = 1000.0;

    /// Player sprite side length
    pub const PLAYER_SIZE: f32 = 60.0;
    /// Keyboard movement per tick, per axis
    pub const PLAYER_SPEED: f32 = 8.0;
    /// Distance the player keeps from the canvas edges
    pub const EDGE_MARGIN: f32 = 5.0;
    /// Player starts this far above the bottom edge
    pub const PLAYER_START_OFFSET: f32 = 100.0;

    /// Collectible sprite side length
    pub const COLLECTIBLE_SIZE: f32 = 50.0;
    /// Downward drift per tick
    pub const SCROLL_SPEED: f32 = 3.0;

    /// Collectibles spawned immediately when a round starts
    pub const INITIAL_COLLECTIBLES: usize = 5;
    /// Spawn interval before the first redraw
    pub const INITIAL_SPAWN_INTERVAL: i32 = 30;
    /// Redrawn spawn intervals fall in this range (frames)
    pub const SPAWN_INTERVAL_MIN: i32 = 5;
    pub const SPAWN_INTERVAL_MAX: i32 = 20;
    /// Subtracted from the interval to delay the first timed spawn
    pub const SPAWN_WARM_UP: i32 = 60;

    /// Background seed point defaults
    pub const FIELD_SEED: u64 = 80;
    pub const FIELD_SEED_POINTS: usize = 12;

    /// Start button geometry (relative to canvas center)
    pub const START_BUTTON_WIDTH: f32 = 100.0;
    pub const START_BUTTON_HEIGHT: f32 = 50.0;
}
