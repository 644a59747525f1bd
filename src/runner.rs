//! Top-level simulation loop
//!
//! Frame-stepped and single-threaded: while running, each pass ticks the
//! physics, submits draw calls for trails and bodies, presents, and lets
//! the renderer pace the next frame. The only transition is
//! `Running -> Stopped`, taken when the renderer reports a quit request;
//! a presentation failure is fatal and ends the loop through `Err`.

use crate::config::WorldConfig;
use crate::consts::TRAIL_POINT_RADIUS;
use crate::renderer::{RenderError, Renderer, trail_fade_color};
use crate::sim::state::{SimPhase, SimState};
use crate::sim::tick::tick;

/// Drive the simulation until a quit request or a renderer failure.
///
/// The first tick integrates with `dt = 0`; subsequent dt values come from
/// the renderer's frame pacing, one tick at a time, never carried over.
pub fn run<R: Renderer>(
    state: &mut SimState,
    world: &WorldConfig,
    renderer: &mut R,
) -> Result<(), RenderError> {
    let mut dt = 0.0;

    while state.phase == SimPhase::Running {
        if renderer.poll_quit_requested() {
            state.request_stop();
            break;
        }

        let events = tick(state, world, dt);
        if !events.is_empty() {
            log::debug!("tick {}: {} contact(s)", state.time_ticks, events.len());
        }

        renderer.clear_frame();
        let max_lifetime = state.trails.max_lifetime();
        for point in state.trails.points() {
            renderer.draw_circle(
                point.pos,
                TRAIL_POINT_RADIUS,
                trail_fade_color(point.intensity(max_lifetime)),
            );
        }
        for body in &state.bodies {
            renderer.draw_circle(body.pos, body.radius, body.color);
        }
        renderer.present_frame()?;

        dt = renderer.wait_for_next_tick(world.target_fps);
    }

    log::info!("simulation stopped after {} ticks", state.time_ticks);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::HeadlessRenderer;
    use crate::roster;

    #[test]
    fn test_loop_stops_on_quit_request() {
        let world = WorldConfig::default();
        let mut state = SimState::new(&world, &roster::demo_roster()).unwrap();
        let mut renderer = HeadlessRenderer::fixed(10);

        run(&mut state, &world, &mut renderer).unwrap();

        assert_eq!(state.phase, SimPhase::Stopped);
        assert_eq!(state.time_ticks, 10);
        assert_eq!(renderer.frames_presented, 10);
    }

    #[test]
    fn test_every_body_is_drawn_each_frame() {
        let world = WorldConfig::default();
        let mut state = SimState::new(&world, &roster::demo_roster()).unwrap();
        let mut renderer = HeadlessRenderer::fixed(3);

        run(&mut state, &world, &mut renderer).unwrap();

        // The last frame holds one circle per body plus one per live
        // trail point
        let expected = state.bodies.len() + state.trails.points().len();
        assert_eq!(renderer.frame.len(), expected);
    }

    #[test]
    fn test_trail_points_draw_with_fade_color() {
        // Sample every frame so trail circles appear by frame two
        let world = WorldConfig {
            trail_sample_interval: 1,
            ..Default::default()
        };
        let mut state = SimState::new(&world, &roster::demo_roster()).unwrap();
        let mut renderer = HeadlessRenderer::fixed(2);

        run(&mut state, &world, &mut renderer).unwrap();

        let trail_calls = renderer
            .frame
            .iter()
            .filter(|c| c.radius == TRAIL_POINT_RADIUS)
            .count();
        assert_eq!(trail_calls, state.trails.points().len());
        assert_eq!(trail_calls, 2 * state.bodies.len());
    }

    #[test]
    fn test_zero_frames_never_ticks() {
        let world = WorldConfig::default();
        let mut state = SimState::new(&world, &roster::demo_roster()).unwrap();
        let mut renderer = HeadlessRenderer::fixed(0);

        run(&mut state, &world, &mut renderer).unwrap();

        assert_eq!(state.time_ticks, 0);
        assert_eq!(renderer.frames_presented, 0);
    }
}
