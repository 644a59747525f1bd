//! Pairwise collision detection and elastic response
//!
//! Brute-force all-pairs detection over the body roster, then the 2D
//! elastic-collision impulse applied to both bodies of each contact. The
//! resolver owns no state: every call re-evaluates the roster from scratch.
//!
//! All responses for a tick are computed from one snapshot of pre-tick
//! positions and velocities. A pair never observes another pair's
//! post-collision velocity, and a body in several contacts accumulates the
//! sum of its pairwise impulses.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::WorldConfig;
use crate::consts::DISTANCE_EPSILON;
use crate::sim::body::Body;

/// What `resolve_all` does with a detected contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ResponseMode {
    /// Full elastic impulse exchange
    #[default]
    Physical,
    /// Log each contact, leave velocities untouched
    ReportOnly,
    /// Skip the pair scan entirely
    Disabled,
}

/// Denominator used by the impulse formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DistanceModel {
    /// True squared center distance; conserves momentum and kinetic energy
    #[default]
    Euclidean,
    /// Per-axis squared position difference. Conserves momentum but not
    /// kinetic energy; kept for backward-compatible trajectories.
    AxisLocal,
}

/// A contact detected during one `resolve_all` pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// Roster index of the first body
    pub i: usize,
    /// Roster index of the second body
    pub j: usize,
    /// Center distance at detection (px)
    pub distance: f32,
}

/// Detect every overlapping unordered pair and apply the configured
/// response. Returns the detected contacts (empty under `Disabled`).
pub fn resolve_all(bodies: &mut [Body], world: &WorldConfig) -> Vec<CollisionEvent> {
    if world.response == ResponseMode::Disabled {
        return Vec::new();
    }

    let snapshot: Vec<(Vec2, Vec2)> = bodies.iter().map(|b| (b.pos, b.vel)).collect();
    let mut delta_v = vec![Vec2::ZERO; bodies.len()];
    let mut events = Vec::new();

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (pi, vi) = snapshot[i];
            let (pj, vj) = snapshot[j];

            let distance = pi.distance(pj);
            if distance > bodies[i].radius + bodies[j].radius {
                continue;
            }
            events.push(CollisionEvent { i, j, distance });

            if world.response == ResponseMode::ReportOnly {
                log::info!("contact: bodies {i} and {j} at distance {distance:.2}");
                continue;
            }

            let (di, dj) = pair_impulse(
                pi,
                vi,
                bodies[i].mass,
                pj,
                vj,
                bodies[j].mass,
                world.distance_model,
            );
            delta_v[i] += di;
            delta_v[j] += dj;
        }
    }

    for (body, dv) in bodies.iter_mut().zip(&delta_v) {
        body.vel += *dv;
    }

    events
}

/// Velocity changes for one colliding pair, from pre-collision state.
///
/// The relative-motion term `(v_i - v_j) · (p_i - p_j)` is the full 2D dot
/// product, computed once and reused for both axis updates. Coincident
/// centers are guarded by an epsilon denominator.
fn pair_impulse(
    pi: Vec2,
    vi: Vec2,
    mi: f32,
    pj: Vec2,
    vj: Vec2,
    mj: f32,
    model: DistanceModel,
) -> (Vec2, Vec2) {
    let m = mi + mj;
    let dp = pi - pj;
    let dot = (vi - vj).dot(dp);

    let (d2x, d2y) = match model {
        DistanceModel::Euclidean => {
            let d2 = guard(dp.length_squared());
            (d2, d2)
        }
        DistanceModel::AxisLocal => (guard(dp.x * dp.x), guard(dp.y * dp.y)),
    };

    let ki = -2.0 * mj / m * dot;
    let kj = -2.0 * mi / m * dot;
    let di = Vec2::new(ki * dp.x / d2x, ki * dp.y / d2y);
    let dj = Vec2::new(kj * -dp.x / d2x, kj * -dp.y / d2y);
    (di, dj)
}

#[inline]
fn guard(d2: f32) -> f32 {
    if d2 == 0.0 { DISTANCE_EPSILON } else { d2 }
}
