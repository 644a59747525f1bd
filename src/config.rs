//! World parameters
//!
//! One immutable struct shared read-only by every component. Built once at
//! startup, validated before the first tick, never mutated mid-run.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::collision::{DistanceModel, ResponseMode};

/// Process-wide simulation parameters, read-only after init
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Gravitational acceleration added to `vel.y` (m/s²; sign picks the down direction)
    pub gravity: f32,
    /// Arena width (px)
    pub arena_width: f32,
    /// Arena height (px)
    pub arena_height: f32,
    /// Pixels per simulation meter
    pub pixels_per_meter: f32,
    /// Boundary restitution coefficient, valid range (0, 1)
    pub restitution: f32,
    /// Frames between trail samples per body
    pub trail_sample_interval: u32,
    /// Trail point lifetime (frames)
    pub trail_max_lifetime: u32,
    /// Pairwise collision response mode
    #[serde(default)]
    pub response: ResponseMode,
    /// Denominator model for the collision impulse
    #[serde(default)]
    pub distance_model: DistanceModel,
    /// Frame rate cap for the loop
    pub target_fps: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            pixels_per_meter: PIXELS_PER_METER,
            restitution: RESTITUTION,
            trail_sample_interval: TRAIL_SAMPLE_INTERVAL,
            trail_max_lifetime: TRAIL_MAX_LIFETIME,
            response: ResponseMode::default(),
            distance_model: DistanceModel::default(),
            target_fps: TARGET_FPS,
        }
    }
}

/// Rejected configuration, reported before the simulation starts
#[derive(Debug)]
pub enum ConfigError {
    /// A numeric field is NaN or infinite
    NonFinite(&'static str),
    /// Arena extents must be positive
    NonPositiveArena,
    /// `pixels_per_meter` must be positive
    NonPositiveScale,
    /// Restitution at or above 1 injects energy on every bounce
    EnergyInjectingRestitution(f32),
    /// Restitution at or below 0 cannot reflect
    NonPositiveRestitution(f32),
    /// Trail sampling interval and lifetime must be nonzero
    ZeroTrailParameter(&'static str),
    /// Frame rate cap must be nonzero
    ZeroTargetFps,
    /// A body spec carries a non-positive or non-finite mass
    InvalidMass(usize, f32),
    /// A body spec carries a non-positive or non-finite radius
    InvalidRadius(usize, f32),
    /// The roster has no bodies
    EmptyRoster,
    /// Config file could not be read
    Io(std::io::Error),
    /// Config file could not be parsed
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFinite(field) => write!(f, "{field} must be finite"),
            ConfigError::NonPositiveArena => write!(f, "arena extents must be positive"),
            ConfigError::NonPositiveScale => write!(f, "pixels_per_meter must be positive"),
            ConfigError::EnergyInjectingRestitution(e) => {
                write!(f, "restitution {e} >= 1 injects energy on every bounce")
            }
            ConfigError::NonPositiveRestitution(e) => {
                write!(f, "restitution {e} <= 0 cannot reflect")
            }
            ConfigError::ZeroTrailParameter(field) => write!(f, "{field} must be nonzero"),
            ConfigError::ZeroTargetFps => write!(f, "target_fps must be nonzero"),
            ConfigError::InvalidMass(i, m) => write!(f, "body {i}: invalid mass {m}"),
            ConfigError::InvalidRadius(i, r) => write!(f, "body {i}: invalid radius {r}"),
            ConfigError::EmptyRoster => write!(f, "roster has no bodies"),
            ConfigError::Io(e) => write!(f, "config file: {e}"),
            ConfigError::Parse(e) => write!(f, "config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl WorldConfig {
    /// Check every field, rejecting values that would produce a divergent
    /// or undefined simulation. Called once at simulation construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() {
            return Err(ConfigError::NonFinite("gravity"));
        }
        if !self.arena_width.is_finite() || !self.arena_height.is_finite() {
            return Err(ConfigError::NonFinite("arena extents"));
        }
        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return Err(ConfigError::NonPositiveArena);
        }
        if !self.pixels_per_meter.is_finite() || self.pixels_per_meter <= 0.0 {
            return Err(ConfigError::NonPositiveScale);
        }
        if !self.restitution.is_finite() {
            return Err(ConfigError::NonFinite("restitution"));
        }
        if self.restitution >= 1.0 {
            return Err(ConfigError::EnergyInjectingRestitution(self.restitution));
        }
        if self.restitution <= 0.0 {
            return Err(ConfigError::NonPositiveRestitution(self.restitution));
        }
        if self.trail_sample_interval == 0 {
            return Err(ConfigError::ZeroTrailParameter("trail_sample_interval"));
        }
        if self.trail_max_lifetime == 0 {
            return Err(ConfigError::ZeroTrailParameter("trail_max_lifetime"));
        }
        if self.target_fps == 0 {
            return Err(ConfigError::ZeroTargetFps);
        }
        Ok(())
    }

    /// Load world parameters from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&json)?;
        log::info!("Loaded world config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Write world parameters to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Saved world config to {}", path.as_ref().display());
        Ok(())
    }
}
