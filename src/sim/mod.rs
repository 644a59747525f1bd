//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - Single-threaded, frame-stepped mutation only
//! - Stable body order (roster position) for the pair scan
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod state;
pub mod tick;
pub mod trail;

pub use body::Body;
pub use collision::{CollisionEvent, DistanceModel, ResponseMode, resolve_all};
pub use state::{SimPhase, SimState};
pub use tick::tick;
pub use trail::{TrailPoint, TrailSystem};
