//! Headless renderer backend
//!
//! Runs the loop without a window: draw calls are recorded instead of
//! rasterized, quit is reported after a fixed frame budget, and pacing is
//! either a fixed deterministic dt or a real wall-clock FrameClock.

use glam::Vec2;

use super::{Color, FrameClock, RenderError, Renderer};

/// One recorded `draw_circle` call
#[derive(Debug, Clone, Copy)]
pub struct DrawCall {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// Windowless backend for tests and demo runs
#[derive(Debug)]
pub struct HeadlessRenderer {
    /// Frames to run before reporting a quit request
    frames_remaining: u64,
    /// Wall-clock pacing when set; fixed `1/target_fps` otherwise
    clock: Option<FrameClock>,
    /// Draw calls recorded since the last clear
    pub frame: Vec<DrawCall>,
    /// Frames presented so far
    pub frames_presented: u64,
}

impl HeadlessRenderer {
    /// Deterministic backend: dt is exactly `1/target_fps`, no sleeping
    pub fn fixed(frame_budget: u64) -> Self {
        Self {
            frames_remaining: frame_budget,
            clock: None,
            frame: Vec::new(),
            frames_presented: 0,
        }
    }

    /// Real-time backend: dt comes from a wall-clock FrameClock
    pub fn paced(frame_budget: u64) -> Self {
        Self {
            clock: Some(FrameClock::new()),
            ..Self::fixed(frame_budget)
        }
    }
}

impl Renderer for HeadlessRenderer {
    fn clear_frame(&mut self) {
        self.frame.clear();
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.frame.push(DrawCall {
            center,
            radius,
            color,
        });
    }

    fn present_frame(&mut self) -> Result<(), RenderError> {
        self.frames_presented += 1;
        Ok(())
    }

    fn poll_quit_requested(&mut self) -> bool {
        if self.frames_remaining == 0 {
            return true;
        }
        self.frames_remaining -= 1;
        false
    }

    fn wait_for_next_tick(&mut self, target_fps: u32) -> f32 {
        match &mut self.clock {
            Some(clock) => clock.tick(target_fps),
            None => 1.0 / target_fps.max(1) as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_after_frame_budget() {
        let mut renderer = HeadlessRenderer::fixed(2);

        assert!(!renderer.poll_quit_requested());
        assert!(!renderer.poll_quit_requested());
        assert!(renderer.poll_quit_requested());
    }

    #[test]
    fn test_clear_drops_recorded_calls() {
        let mut renderer = HeadlessRenderer::fixed(10);
        renderer.draw_circle(Vec2::ZERO, 1.0, [1.0; 4]);
        assert_eq!(renderer.frame.len(), 1);

        renderer.clear_frame();
        assert!(renderer.frame.is_empty());
    }

    #[test]
    fn test_fixed_dt_matches_target() {
        let mut renderer = HeadlessRenderer::fixed(10);
        assert_eq!(renderer.wait_for_next_tick(60), 1.0 / 60.0);
    }
}
