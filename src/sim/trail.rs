//! Fading position trails
//!
//! Each body periodically drops a timestamped sample of its position; the
//! samples age out over a fixed number of frames. Trails are visual only
//! and never feed back into the physics, but they share the per-frame
//! cadence of the rest of the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One past-position sample with a bounded lifetime
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrailPoint {
    /// Sampled position (arena px)
    pub pos: Vec2,
    /// Frames until this point is pruned
    pub remaining: u32,
}

impl TrailPoint {
    /// Linear fade intensity, `round(255 * remaining / max_lifetime)`
    #[inline]
    pub fn intensity(&self, max_lifetime: u32) -> u8 {
        let t = self.remaining as f32 / max_lifetime.max(1) as f32;
        (255.0 * t).round().clamp(0.0, 255.0) as u8
    }
}

/// Owns every live trail point plus the per-body sampling counters.
///
/// Points hold no reference back to the body that dropped them; a body's
/// history outlives any interest the body has in it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrailSystem {
    /// Frames between samples per body
    sample_interval: u32,
    /// Lifetime assigned to each new point
    max_lifetime: u32,
    /// Live points, all bodies mixed; order is irrelevant
    points: Vec<TrailPoint>,
    /// Frames since last sample, indexed by roster position
    counters: Vec<u32>,
}

impl TrailSystem {
    pub fn new(sample_interval: u32, max_lifetime: u32, body_count: usize) -> Self {
        Self {
            sample_interval,
            max_lifetime,
            points: Vec::new(),
            counters: vec![0; body_count],
        }
    }

    /// Age every point by one frame and prune the expired ones
    pub fn tick(&mut self) {
        for point in &mut self.points {
            point.remaining = point.remaining.saturating_sub(1);
        }
        self.points.retain(|p| p.remaining > 0);
    }

    /// Advance the body's sample counter; at the configured interval, drop
    /// a new point at `pos` and reset the counter.
    pub fn maybe_sample(&mut self, body_index: usize, pos: Vec2) {
        let counter = &mut self.counters[body_index];
        *counter += 1;
        if *counter >= self.sample_interval {
            self.points.push(TrailPoint {
                pos,
                remaining: self.max_lifetime,
            });
            *counter = 0;
        }
    }

    /// Live points, oldest first
    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    pub fn max_lifetime(&self) -> u32 {
        self.max_lifetime
    }
}
