//! Collision detection and penalty force accumulation.
//!
//! Contacts are resolved with an explicit spring-damper model rather than a
//! constraint solver: overlapping particles from different bodies push each
//! other apart, and domain boundaries feed a corrective force back into the
//! owning body. Pair enumeration sits behind [`CandidatePairs`] so a spatial
//! broad-phase can replace the all-pairs scan without touching the force
//! contract.

mod boundary;
mod contact;
mod pairs;

pub use boundary::boundary_force;
pub use contact::pair_force;
pub use pairs::{AllPairs, CandidatePairs};

use crate::params::SimParams;
use crate::types::Vec3;
use crate::world::WorldState;

/// Net force and torque accumulated on one body during a substep.
#[derive(Copy, Clone, Debug, Default)]
pub struct BodyForces {
    pub force: Vec3,
    pub torque: Vec3,
}

impl BodyForces {
    pub const ZERO: Self = Self {
        force: Vec3::ZERO,
        torque: Vec3::ZERO,
    };
}

/// Accumulate contact forces and torques for every candidate particle pair.
///
/// Each pair contributes equal and opposite forces to the two owning bodies;
/// torque is taken about each body's center of mass at the particle's world
/// position.
pub fn accumulate_contact_forces(
    world: &WorldState,
    pairs: &[(usize, usize)],
    params: &SimParams,
    forces: &mut [BodyForces],
) {
    for &(i, j) in pairs {
        let pi = world.particles[i];
        let pj = world.particles[j];
        let Some(f) = pair_force(pi.pos, pj.pos, pi.vel, pj.vel, params) else {
            continue;
        };
        let bi = pi.body;
        let bj = pj.body;
        forces[bi].force += f;
        forces[bi].torque += (pi.pos - world.bodies[bi].pos).cross(f);
        forces[bj].force -= f;
        forces[bj].torque += (pj.pos - world.bodies[bj].pos).cross(-f);
    }
}
