//! Procedural background
//!
//! Every pixel is shaded by its distance to the nearest of a fixed set of
//! seed points, giving a cellular, wave-like gradient. The seed points are
//! generated once from a fixed seed and never change. Shading is stateless
//! and recomputed in full each frame.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::canvas::PixelFrame;
use crate::error::ConfigError;

/// Shaping parameters for one color channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelWave {
    pub scale: f32,
    pub offset: f32,
    pub exponent: f32,
}

/// Channel shaping: dark red, strong green, stronger blue
pub const RED: ChannelWave = ChannelWave {
    scale: 40.0,
    offset: 0.0,
    exponent: 2.0,
};
pub const GREEN: ChannelWave = ChannelWave {
    scale: 30.0,
    offset: 150.0,
    exponent: 2.5,
};
pub const BLUE: ChannelWave = ChannelWave {
    scale: 20.0,
    offset: 200.0,
    exponent: 3.0,
};

/// `offset + (noise / scale)^exponent`, or just `offset` for negative noise
#[inline]
pub fn wave_color(noise: f32, scale: f32, offset: f32, exponent: f32) -> f32 {
    if noise < 0.0 {
        offset
    } else {
        offset + (noise / scale).powf(exponent)
    }
}

/// Round and saturate a channel intensity into a byte
#[inline]
fn to_byte(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Background renderer over a fixed seed-point set
#[derive(Debug, Clone)]
pub struct BackgroundField {
    seeds: Vec<Vec2>,
}

impl BackgroundField {
    /// Use an explicit seed-point set (must be non-empty)
    pub fn new(seeds: Vec<Vec2>) -> Result<Self, ConfigError> {
        if seeds.is_empty() {
            return Err(ConfigError::NoSeedPoints);
        }
        Ok(Self { seeds })
    }

    /// Scatter `count` seed points over the canvas from a fixed seed
    pub fn generate(seed: u64, count: usize, width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyCanvas { width, height });
        }
        let mut rng = Pcg32::seed_from_u64(seed);
        let seeds = (0..count)
            .map(|_| {
                let x = rng.random_range(0.0..width as f32);
                let y = rng.random_range(0.0..height as f32);
                Vec2::new(x, y)
            })
            .collect();
        Self::new(seeds)
    }

    pub fn seeds(&self) -> &[Vec2] {
        &self.seeds
    }

    /// Distance from a pixel to its nearest seed point
    pub fn noise_at(&self, x: f32, y: f32) -> f32 {
        let p = Vec2::new(x, y);
        let closest = self
            .seeds
            .iter()
            .map(|s| s.distance_squared(p))
            .fold(f32::INFINITY, f32::min);
        closest.sqrt()
    }

    /// Opaque RGBA shade for a noise value
    pub fn shade(noise: f32) -> [u8; 4] {
        [
            to_byte(wave_color(noise, RED.scale, RED.offset, RED.exponent)),
            to_byte(wave_color(noise, GREEN.scale, GREEN.offset, GREEN.exponent)),
            to_byte(wave_color(noise, BLUE.scale, BLUE.offset, BLUE.exponent)),
            255,
        ]
    }

    /// Overwrite every pixel of the frame
    pub fn render(&self, frame: &mut PixelFrame) {
        let width = frame.width() as usize;
        for (i, px) in frame.pixels_mut().iter_mut().enumerate() {
            let x = (i % width) as f32;
            let y = (i / width) as f32;
            *px = Self::shade(self.noise_at(x, y));
        }
    }
}
