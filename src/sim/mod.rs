//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Seeded RNG only
//! - Time comes in as clock readings, never read directly
//! - Entities are plain data moved by free functions

pub mod autopilot;
pub mod collision;
pub mod movement;
pub mod session;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{collect_overlapping, collects, overlaps};
pub use movement::{move_collectible, move_player};
pub use session::{advance_timer, check_game_over, reset, restart, start_round};
pub use spawner::{Spawner, spawn_collectible};
pub use state::{Bounds, Collectible, GamePhase, GameState, Player};
pub use tick::{TickEvents, TickInput, tick};
