//! Initial body rosters
//!
//! The physics engine takes its bodies as a fixed list of construction
//! tuples supplied at startup. The demo roster is hardcoded; a seeded
//! generator can produce larger rosters deterministically.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, WorldConfig};
use crate::renderer::Color;

/// The demo roster's body color
pub const ALICE_BLUE: Color = [0.941, 0.973, 1.0, 1.0];

/// Construction tuple for one body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodySpec {
    /// Initial center position (arena px)
    pub pos: Vec2,
    /// Initial velocity (m/s)
    pub vel: Vec2,
    /// Radius in meters (scaled to px at body construction)
    pub radius_m: f32,
    /// Mass (kg)
    pub mass: f32,
    /// Display color
    pub color: Color,
}

impl BodySpec {
    /// Reject specs that would diverge the simulation. `index` is the
    /// roster position, carried into the error for reporting.
    pub fn validate(&self, index: usize) -> Result<(), ConfigError> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(ConfigError::InvalidMass(index, self.mass));
        }
        if !self.radius_m.is_finite() || self.radius_m <= 0.0 {
            return Err(ConfigError::InvalidRadius(index, self.radius_m));
        }
        if !self.pos.is_finite() || !self.vel.is_finite() {
            return Err(ConfigError::NonFinite("body position/velocity"));
        }
        Ok(())
    }
}

/// The five-body demo scene
pub fn demo_roster() -> Vec<BodySpec> {
    let spec = |pos: (f32, f32), radius_m: f32, mass: f32, vel: (f32, f32)| BodySpec {
        pos: Vec2::new(pos.0, pos.1),
        vel: Vec2::new(vel.0, vel.1),
        radius_m,
        mass,
        color: ALICE_BLUE,
    };

    vec![
        spec((100.0, 300.0), 1.0, 5.0, (10.0, 5.0)),
        spec((400.0, 400.0), 1.5, 50.0, (50.0, 0.0)),
        spec((400.0, 350.0), 1.25, 25.0, (-10.0, 50.0)),
        spec((600.0, 700.0), 1.1, 10.0, (-30.0, -10.0)),
        spec((300.0, 600.0), 1.0, 5.0, (100.0, -30.0)),
    ]
}

/// Generate `count` non-overlapping bodies from a seed.
///
/// Positions are drawn uniformly with a radius margin from the bounds;
/// candidates overlapping an already-placed body are rejected and redrawn.
pub fn random_roster(seed: u64, count: usize, world: &WorldConfig) -> Vec<BodySpec> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut specs: Vec<BodySpec> = Vec::with_capacity(count);

    while specs.len() < count {
        let radius_m = rng.random_range(0.8..1.6);
        let radius_px = radius_m * world.pixels_per_meter;
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = rng.random_range(3.0..50.0);

        let candidate = BodySpec {
            pos: Vec2::new(
                rng.random_range(radius_px..world.arena_width - radius_px),
                rng.random_range(radius_px..world.arena_height - radius_px),
            ),
            vel: Vec2::new(speed * angle.cos(), speed * angle.sin()),
            radius_m,
            mass: rng.random_range(5.0..50.0),
            color: ALICE_BLUE,
        };

        let overlaps = specs.iter().any(|other| {
            let min_gap = (other.radius_m + candidate.radius_m) * world.pixels_per_meter;
            other.pos.distance(candidate.pos) <= min_gap
        });
        if !overlaps {
            specs.push(candidate);
        }
    }

    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_roster_is_valid() {
        for (i, spec) in demo_roster().iter().enumerate() {
            assert!(spec.validate(i).is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_non_positive_mass_and_radius() {
        let mut spec = demo_roster().remove(0);
        spec.mass = 0.0;
        assert!(matches!(spec.validate(3), Err(ConfigError::InvalidMass(3, _))));

        let mut spec = demo_roster().remove(0);
        spec.radius_m = -1.0;
        assert!(matches!(
            spec.validate(0),
            Err(ConfigError::InvalidRadius(0, _))
        ));
    }

    #[test]
    fn test_random_roster_is_deterministic() {
        let world = WorldConfig::default();
        let a = random_roster(7, 12, &world);
        let b = random_roster(7, 12, &world);

        assert_eq!(a.len(), 12);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.vel, y.vel);
        }
    }

    #[test]
    fn test_random_roster_has_no_initial_overlap() {
        let world = WorldConfig::default();
        let specs = random_roster(42, 20, &world);

        for i in 0..specs.len() {
            for j in (i + 1)..specs.len() {
                let min_gap = (specs[i].radius_m + specs[j].radius_m) * world.pixels_per_meter;
                assert!(specs[i].pos.distance(specs[j].pos) > min_gap);
            }
        }
    }

    #[test]
    fn test_random_roster_stays_in_bounds() {
        let world = WorldConfig::default();
        for spec in random_roster(1, 20, &world) {
            let r = spec.radius_m * world.pixels_per_meter;
            assert!(spec.pos.x >= r && spec.pos.x <= world.arena_width - r);
            assert!(spec.pos.y >= r && spec.pos.y <= world.arena_height - r);
        }
    }
}
