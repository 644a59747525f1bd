//! Fallbox entry point
//!
//! Runs the demo scene headless: no windowing backend ships with the core,
//! so the loop drives the recording renderer with real frame pacing and
//! logs a run summary. Pass a JSON config path as the first argument to
//! override the default world parameters.

use anyhow::{Context, Result};

use fallbox::config::WorldConfig;
use fallbox::renderer::HeadlessRenderer;
use fallbox::roster;
use fallbox::runner;
use fallbox::sim::SimState;

/// Frames the demo runs before quitting (10 seconds at 60 FPS)
const DEMO_FRAMES: u64 = 600;

fn main() -> Result<()> {
    env_logger::init();

    let world = match std::env::args().nth(1) {
        Some(path) => WorldConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => WorldConfig::default(),
    };

    let specs = roster::demo_roster();
    let mut state = SimState::new(&world, &specs).context("building simulation state")?;

    log::info!(
        "Fallbox starting: {} bodies, {}x{} arena, {} FPS cap",
        state.bodies.len(),
        world.arena_width,
        world.arena_height,
        world.target_fps
    );

    let mut renderer = HeadlessRenderer::paced(DEMO_FRAMES);
    runner::run(&mut state, &world, &mut renderer).context("simulation loop")?;

    for (i, body) in state.bodies.iter().enumerate() {
        log::info!(
            "body {i}: pos ({:.1}, {:.1}) vel ({:.2}, {:.2})",
            body.pos.x,
            body.pos.y,
            body.vel.x,
            body.vel.y
        );
    }
    log::info!(
        "{} frames presented, {} live trail points",
        renderer.frames_presented,
        state.trails.points().len()
    );

    Ok(())
}
