//! Platform abstraction layer
//!
//! Capabilities the host hands to the game:
//! - A monotonic millisecond clock
//! - The start button
//! - Held keys and touches, sampled once per tick

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use crate::sim::TickInput;

/// Monotonic real-time clock in milliseconds
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Native clock measured from construction
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Browser `performance.now()`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct PerformanceClock {
    performance: web_sys::Performance,
}

#[cfg(target_arch = "wasm32")]
impl PerformanceClock {
    pub fn new() -> Option<Self> {
        let performance = web_sys::window()?.performance()?;
        Some(Self { performance })
    }
}

#[cfg(target_arch = "wasm32")]
impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        self.performance.now()
    }
}

/// Hand-driven clock for tests and headless runs.
///
/// Clones share the same reading, so a caller can keep one handle and
/// advance time while the game owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// The clickable "Start Game" control owned by the host UI.
/// Presses are forwarded to [`crate::Game::start_pressed`].
pub trait StartControl {
    /// Position and size in canvas pixels
    fn place(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn show(&mut self);
    fn hide(&mut self);
}

/// Start control with no UI behind it
#[derive(Debug, Clone, Default)]
pub struct HeadlessStartControl {
    pub visible: bool,
}

impl StartControl for HeadlessStartControl {
    fn place(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {}

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

/// Discrete key presses the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Self {
        match key {
            " " | "Spacebar" => Key::Space,
            _ => Key::Other,
        }
    }
}

/// Arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Direction::Left),
            "ArrowRight" | "Right" => Some(Direction::Right),
            "ArrowUp" | "Up" => Some(Direction::Up),
            "ArrowDown" | "Down" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Live input device state, updated by event handlers
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: [bool; 4],
    /// Active touches in canvas pixels, oldest first
    pub touches: Vec<Vec2>,
}

impl InputState {
    pub fn set_held(&mut self, dir: Direction, down: bool) {
        self.held[dir as usize] = down;
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.held[dir as usize]
    }

    /// Snapshot for one tick
    pub fn sample(&self) -> TickInput {
        TickInput {
            pointer: self.touches.first().copied(),
            left: self.is_held(Direction::Left),
            right: self.is_held(Direction::Right),
            up: self.is_held(Direction::Up),
            down: self.is_held(Direction::Down),
        }
    }
}
