//! Fixed per-tick update
//!
//! One tick advances the whole simulation in a fixed phase order:
//! trail aging, body integration, collision resolution, trail sampling.
//! `dt` is an input for this tick only and is never carried across calls.

use crate::config::WorldConfig;
use crate::sim::collision::{self, CollisionEvent};
use crate::sim::state::SimState;

/// Advance the simulation by one frame. Returns the contacts detected by
/// the collision pass for the caller's instrumentation.
pub fn tick(state: &mut SimState, world: &WorldConfig, dt: f32) -> Vec<CollisionEvent> {
    state.time_ticks += 1;

    state.trails.tick();

    for body in &mut state.bodies {
        body.step(dt, world);
    }

    let events = collision::resolve_all(&mut state.bodies, world);

    for (i, body) in state.bodies.iter().enumerate() {
        state.trails.maybe_sample(i, body.pos);
    }

    events
}
