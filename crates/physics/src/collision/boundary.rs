//! Domain boundary handling.
//!
//! Instead of a contact point, each boundary contributes a synthetic force
//! that approximates an instantaneous velocity reversal spread over a short
//! window. Only the single worst-offending particle per axis counts: the one
//! with the largest velocity magnitude moving into a boundary while
//! positioned past it.

use crate::params::SimParams;
use crate::types::Vec3;
use crate::world::WorldState;

/// Corrective force for one body from the floor and the two side walls.
#[must_use]
pub fn boundary_force(world: &WorldState, body_index: usize, params: &SimParams) -> Vec3 {
    let body = &world.bodies[body_index];
    let mut worst_x = 0.0_f32;
    let mut worst_y = 0.0_f32;

    for particle in &world.particles[body.start..body.end] {
        let past_floor = particle.pos.y < params.floor_y + params.radius && particle.vel.y < 0.0;
        if past_floor && particle.vel.y.abs() > worst_y.abs() {
            worst_y = particle.vel.y;
        }

        let into_left = particle.pos.x < -params.wall_x + params.radius && particle.vel.x < 0.0;
        let into_right = particle.pos.x > params.wall_x - params.radius && particle.vel.x > 0.0;
        if (into_left || into_right) && particle.vel.x.abs() > worst_x.abs() {
            worst_x = particle.vel.x;
        }
    }

    let scale = params.reversal_gain / (params.reversal_window * params.dt);
    Vec3::new(-worst_x * scale, -worst_y * scale, 0.0)
}
