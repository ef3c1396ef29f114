//! Game settings
//!
//! Read once at startup. On the web they may be overridden through
//! LocalStorage; nothing is ever written back.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Host-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frames per second requested from the host loop
    pub tick_rate: u32,
    /// Countdown length for each round
    pub round_seconds: i32,
    /// Seed for the background seed points
    pub field_seed: u64,
    /// Number of background seed points
    pub seed_points: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            round_seconds: ROUND_SECONDS,
            field_seed: FIELD_SEED,
            seed_points: FIELD_SEED_POINTS,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check the preconditions the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.round_seconds <= 0 {
            return Err(ConfigError::NonPositiveRound(self.round_seconds));
        }
        if self.seed_points == 0 {
            return Err(ConfigError::NoSeedPoints);
        }
        Ok(())
    }

    /// Milliseconds between host ticks
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.tick_rate.max(1) as f64
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "trash_boat_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_round_rules() {
        let settings = Settings::default();
        assert_eq!(settings.tick_rate, 30);
        assert_eq!(settings.round_seconds, 60);
        assert_eq!(settings.field_seed, 80);
        assert_eq!(settings.seed_points, 12);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "round_seconds": 30 }"#).unwrap();
        assert_eq!(settings.round_seconds, 30);
        assert_eq!(settings.tick_rate, 30);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "seed_points": 0 }"#),
            Err(ConfigError::NoSeedPoints)
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "tick_rate": 0 }"#),
            Err(ConfigError::ZeroTickRate)
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "round_seconds": -1 }"#),
            Err(ConfigError::NonPositiveRound(-1))
        ));
        assert!(matches!(
            Settings::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_frame_interval() {
        let settings = Settings::default();
        assert!((settings.frame_interval_ms() - 33.333).abs() < 0.01);
    }
}
