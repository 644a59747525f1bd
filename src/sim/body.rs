//! Circular rigid bodies
//!
//! A body is a point mass with a radius used only for collision and
//! rendering. It integrates itself under gravity and reflects off the arena
//! bounds; it knows nothing about other bodies.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::WorldConfig;
use crate::renderer::Color;
use crate::roster::BodySpec;

/// One circular mass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Center position (arena px)
    pub pos: Vec2,
    /// Velocity (m/s)
    pub vel: Vec2,
    /// Collision/render radius (px), fixed after construction
    pub radius: f32,
    /// Mass (kg), fixed after construction
    pub mass: f32,
    /// Display color, fixed after construction
    pub color: Color,
}

impl Body {
    /// Build a body from its roster spec. The spec radius is in meters and
    /// is scaled to pixels here, once.
    pub fn from_spec(spec: &BodySpec, world: &WorldConfig) -> Self {
        Self {
            pos: spec.pos,
            vel: spec.vel,
            radius: spec.radius_m * world.pixels_per_meter,
            mass: spec.mass,
            color: spec.color,
        }
    }

    /// Advance one tick: gravity, then position, then boundary reflection.
    ///
    /// Reflection is applied independently per axis: the position is clamped
    /// to the boundary and the velocity component reversed, scaled by the
    /// restitution coefficient.
    pub fn step(&mut self, dt: f32, world: &WorldConfig) {
        let scale = world.pixels_per_meter;

        self.vel.y += world.gravity * scale * dt;
        self.pos += self.vel * scale * dt;

        if self.pos.y <= 0.0 {
            self.pos.y = 0.0;
            self.vel.y = -self.vel.y * world.restitution;
        } else if self.pos.y >= world.arena_height {
            self.pos.y = world.arena_height;
            self.vel.y = -self.vel.y * world.restitution;
        }

        if self.pos.x <= 0.0 {
            self.pos.x = 0.0;
            self.vel.x = -self.vel.x * world.restitution;
        } else if self.pos.x >= world.arena_width {
            self.pos.x = world.arena_width;
            self.vel.x = -self.vel.x * world.restitution;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster;

    fn still_world() -> WorldConfig {
        WorldConfig {
            gravity: 0.0,
            pixels_per_meter: 1.0,
            ..Default::default()
        }
    }

    fn body_at(pos: Vec2, vel: Vec2) -> Body {
        Body {
            pos,
            vel,
            radius: 8.0,
            mass: 5.0,
            color: roster::ALICE_BLUE,
        }
    }

    #[test]
    fn test_noop_step_is_idempotent() {
        // Zero gravity, zero velocity, away from every boundary
        let world = still_world();
        let mut body = body_at(Vec2::new(400.0, 350.0), Vec2::ZERO);

        body.step(1.0 / 60.0, &world);

        assert_eq!(body.pos, Vec2::new(400.0, 350.0));
        assert_eq!(body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_gravity_integrates_into_velocity_then_position() {
        let world = WorldConfig {
            gravity: 10.0,
            pixels_per_meter: 1.0,
            ..Default::default()
        };
        let mut body = body_at(Vec2::new(400.0, 350.0), Vec2::ZERO);

        let dt = 0.5;
        body.step(dt, &world);

        // Semi-implicit: velocity updates first and feeds the same tick's move
        assert!((body.vel.y - 5.0).abs() < 1e-6);
        assert!((body.pos.y - 352.5).abs() < 1e-4);
        assert_eq!(body.pos.x, 400.0);
    }

    #[test]
    fn test_floor_bounce_clamps_and_reflects() {
        // Body at y=0 moving down at -5 with e=0.9: clamp to 0, reflect to +4.5
        let world = still_world();
        let mut body = body_at(Vec2::new(400.0, 0.0), Vec2::new(0.0, -5.0));

        body.step(1.0 / 60.0, &world);

        assert_eq!(body.pos.y, 0.0);
        assert!((body.vel.y - 4.5).abs() < 1e-6);
    }

    #[test]
    fn test_both_axes_reflect_independently() {
        let world = still_world();
        let mut body = body_at(Vec2::new(0.5, 0.5), Vec2::new(-60.0, -60.0));

        body.step(1.0 / 60.0, &world);

        assert_eq!(body.pos, Vec2::ZERO);
        assert!(body.vel.x > 0.0);
        assert!(body.vel.y > 0.0);
    }

    #[test]
    fn test_far_boundary_clamps_to_extent() {
        let world = still_world();
        let mut body = body_at(
            Vec2::new(world.arena_width - 0.5, world.arena_height - 0.5),
            Vec2::new(60.0, 60.0),
        );

        body.step(1.0 / 60.0, &world);

        assert_eq!(body.pos.x, world.arena_width);
        assert_eq!(body.pos.y, world.arena_height);
        assert!(body.vel.x < 0.0);
        assert!(body.vel.y < 0.0);
    }

    #[test]
    fn test_bounce_loses_speed() {
        let world = still_world();
        let mut body = body_at(Vec2::new(400.0, 0.5), Vec2::new(0.0, -30.0));
        let speed_before = body.vel.length();

        body.step(1.0 / 60.0, &world);

        assert!(body.vel.length() < speed_before);
        assert!((body.vel.length() - speed_before * world.restitution).abs() < 1e-4);
    }
}
