//! Simulation state and ownership root
//!
//! `SimState` owns the body roster and the trail system; there is no
//! process-wide mutable state. Everything that varies over a run lives
//! here, built once from the world config and a roster of body specs.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, WorldConfig};
use crate::roster::BodySpec;
use crate::sim::body::Body;
use crate::sim::trail::TrailSystem;

/// Phase of the simulation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Ticking every frame
    Running,
    /// Quit requested; no further ticks
    Stopped,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Current phase
    pub phase: SimPhase,
    /// Tick counter since start
    pub time_ticks: u64,
    /// Fixed roster of bodies, created once at start
    pub bodies: Vec<Body>,
    /// Fading position history (render-only)
    #[serde(skip)]
    pub trails: TrailSystem,
}

impl SimState {
    /// Validate the world config and roster, then build the initial state.
    /// Rejecting bad parameters here is the only validation point; nothing
    /// is re-checked mid-run.
    pub fn new(world: &WorldConfig, roster: &[BodySpec]) -> Result<Self, ConfigError> {
        world.validate()?;
        if roster.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        for (i, spec) in roster.iter().enumerate() {
            spec.validate(i)?;
        }

        let bodies: Vec<Body> = roster.iter().map(|s| Body::from_spec(s, world)).collect();
        let trails = TrailSystem::new(
            world.trail_sample_interval,
            world.trail_max_lifetime,
            bodies.len(),
        );

        Ok(Self {
            phase: SimPhase::Running,
            time_ticks: 0,
            bodies,
            trails,
        })
    }

    /// Transition `Running -> Stopped`. Idempotent; there is no way back.
    pub fn request_stop(&mut self) {
        self.phase = SimPhase::Stopped;
    }
}
