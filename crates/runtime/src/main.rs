#![deny(clippy::all, clippy::pedantic)]

//! Headless frame driver.
//!
//! Stands in for the external render loop: advances the simulation one
//! frame at a time and reads back particle positions, exactly the way a
//! renderer would, just without a window.

use anyhow::Result;
use physics::{SimParams, Simulation};

const BODY_COUNT: usize = 11;
const FRAMES: u32 = 600;
const REPORT_EVERY: u32 = 100;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("initializing simulation with {BODY_COUNT} bodies");
    let mut sim = Simulation::new(BODY_COUNT, physics::PARTICLES_PER_BODY, SimParams::default(), 42)?;

    tracing::info!(
        "running {FRAMES} frames, {} substeps each at dt = {}",
        sim.params.substeps_per_frame,
        sim.params.dt
    );
    for frame in 1..=FRAMES {
        sim.advance_frame();

        if frame % REPORT_EVERY == 0 {
            let body = &sim.world.bodies[0];
            tracing::info!(
                "frame {frame}: body 0 at ({:.3}, {:.3}, {:.3}), |v| = {:.3}",
                body.pos.x,
                body.pos.y,
                body.pos.z,
                body.vel.length()
            );
        }
    }

    let lowest = sim
        .particle_positions()
        .map(|p| p.y)
        .fold(f32::INFINITY, f32::min);
    tracing::info!(
        "done: {} particles, lowest at y = {lowest:.3}",
        sim.particle_positions().len()
    );

    Ok(())
}
