//! Initialization errors
//!
//! Nothing can fail mid-tick; these are reported once, before the loop starts.

use std::fmt;

/// A configuration precondition was violated
#[derive(Debug)]
pub enum ConfigError {
    /// The background field needs at least one seed point
    NoSeedPoints,
    /// Canvas width or height is zero
    EmptyCanvas { width: u32, height: u32 },
    /// Host tick rate must be positive
    ZeroTickRate,
    /// Round length must be positive
    NonPositiveRound(i32),
    /// Settings JSON could not be parsed
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoSeedPoints => write!(f, "background field has no seed points"),
            ConfigError::EmptyCanvas { width, height } => {
                write!(f, "canvas must be non-empty, got {}x{}", width, height)
            }
            ConfigError::ZeroTickRate => write!(f, "tick rate must be at least 1"),
            ConfigError::NonPositiveRound(secs) => {
                write!(f, "round length must be positive, got {}s", secs)
            }
            ConfigError::Parse(e) => write!(f, "invalid settings: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// A sprite asset could not be decoded
#[derive(Debug)]
pub enum AssetError {
    Decode(image::ImageError),
    /// Decoded image has a zero dimension
    Empty,
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Decode(e) => write!(f, "failed to decode sprite: {}", e),
            AssetError::Empty => write!(f, "sprite has no pixels"),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Decode(e) => Some(e),
            AssetError::Empty => None,
        }
    }
}

impl From<image::ImageError> for AssetError {
    fn from(e: image::ImageError) -> Self {
        AssetError::Decode(e)
    }
}
