//! Fallbox - a 2D rigid-body point-mass arena simulator
//!
//! Core modules:
//! - `sim`: Deterministic physics (integration, collisions, trails)
//! - `renderer`: Drawing/windowing collaborator boundary
//! - `config`: Immutable world parameters
//! - `roster`: Initial body construction tuples
//! - `runner`: Top-level frame-stepped simulation loop

pub mod config;
pub mod renderer;
pub mod roster;
pub mod runner;
pub mod sim;

pub use config::{ConfigError, WorldConfig};
pub use renderer::{Color, RenderError, Renderer};

use glam::Vec2;

/// World parameter defaults
pub mod consts {
    /// Gravitational acceleration (m/s², positive is screen-down)
    pub const GRAVITY: f32 = 9.806;

    /// Arena dimensions (px)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 700.0;
    /// Pixels per simulation meter
    pub const PIXELS_PER_METER: f32 = ARENA_WIDTH / 100.0;

    /// Fraction of speed retained after a boundary bounce
    pub const RESTITUTION: f32 = 0.9;

    /// Frames between trail samples (10 frames is 1/6 s at 60 FPS)
    pub const TRAIL_SAMPLE_INTERVAL: u32 = 10;
    /// Trail point lifetime in frames (180 frames is 3 s at 60 FPS)
    pub const TRAIL_MAX_LIFETIME: u32 = 180;
    /// Draw radius for a trail point (px)
    pub const TRAIL_POINT_RADIUS: f32 = 2.0;

    /// Frame rate cap for the simulation loop
    pub const TARGET_FPS: u32 = 60;
    /// Largest dt a single tick may integrate (stall protection)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Substituted for a zero collision denominator
    pub const DISTANCE_EPSILON: f32 = 1e-8;
}

/// Kinetic energy of a point mass, `m * |v|² / 2`
#[inline]
pub fn kinetic_energy(mass: f32, vel: Vec2) -> f32 {
    0.5 * mass * vel.length_squared()
}

/// Momentum vector of a point mass, `m * v`
#[inline]
pub fn momentum(mass: f32, vel: Vec2) -> Vec2 {
    vel * mass
}
