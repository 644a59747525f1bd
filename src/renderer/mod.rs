//! Rendering/windowing collaborator boundary
//!
//! The simulation core draws through this trait and never touches a
//! backend directly. A backend supplies frame clearing, circle drawing,
//! presentation, quit polling, and frame pacing; everything else is the
//! core's business.

pub mod headless;

use std::fmt;
use std::time::{Duration, Instant};

use glam::Vec2;

use crate::consts::MAX_FRAME_DT;

pub use headless::HeadlessRenderer;

/// RGBA display color, linear components in 0..=1
pub type Color = [f32; 4];

/// Fatal backend failure; ends the simulation loop
#[derive(Debug)]
pub struct RenderError {
    pub message: String,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "renderer: {}", self.message)
    }
}

impl std::error::Error for RenderError {}

/// External drawing/windowing collaborator
pub trait Renderer {
    /// Wipe the previous frame
    fn clear_frame(&mut self);

    /// Queue one filled circle
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Present the queued frame. Failure is fatal to the loop.
    fn present_frame(&mut self) -> Result<(), RenderError>;

    /// True once the user asked to quit
    fn poll_quit_requested(&mut self) -> bool;

    /// Block out the remainder of the frame budget and return the elapsed
    /// wall-clock seconds since the previous call
    fn wait_for_next_tick(&mut self, target_fps: u32) -> f32;
}

/// Grayscale fade color for a trail point intensity
#[inline]
pub fn trail_fade_color(intensity: u8) -> Color {
    let v = intensity as f32 / 255.0;
    [v, v, v, 1.0]
}

/// Wall-clock frame pacer capping the loop at a target rate.
///
/// `tick` sleeps out whatever remains of the frame budget, then returns the
/// elapsed seconds since the previous tick, clamped so a stalled frame
/// cannot produce a runaway integration step.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    pub fn tick(&mut self, target_fps: u32) -> f32 {
        let budget = Duration::from_secs_f32(1.0 / target_fps.max(1) as f32);
        let elapsed = self.last.elapsed();
        if elapsed < budget {
            std::thread::sleep(budget - elapsed);
        }

        let now = Instant::now();
        let dt = (now - self.last).as_secs_f32();
        self.last = now;
        dt.min(MAX_FRAME_DT)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_fade_color_endpoints() {
        assert_eq!(trail_fade_color(255), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(trail_fade_color(0), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_frame_clock_respects_budget() {
        let mut clock = FrameClock::new();
        // 200 FPS keeps the test fast; two ticks so the first warm-up
        // interval is excluded
        clock.tick(200);
        let dt = clock.tick(200);

        assert!(dt >= 1.0 / 250.0, "dt {dt} shorter than the frame budget");
        assert!(dt <= MAX_FRAME_DT);
    }
}
