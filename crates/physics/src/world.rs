//! Owned simulation state.
//!
//! All particles and bodies are created once at initialization and mutated
//! in place every substep; nothing is ever added or destroyed afterwards.

use crate::types::{Mat3, Quat, Vec3};

/// A point particle belonging to exactly one rigid body.
///
/// `rest_offset` is fixed at initialization, expressed in the owning body's
/// local frame relative to its center of mass. `pos` and `vel` are world
/// quantities reconstructed from the body transform every substep, not
/// independent state.
#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub rest_offset: Vec3,
    pub pos: Vec3,
    pub vel: Vec3,
    /// Index of the owning body.
    pub body: usize,
}

/// A rigid body made of a contiguous range of particles.
#[derive(Copy, Clone, Debug)]
pub struct RigidBody {
    /// First owned particle index.
    pub start: usize,
    /// One past the last owned particle index.
    pub end: usize,
    /// Center of mass, world frame.
    pub pos: Vec3,
    pub vel: Vec3,
    /// Acceleration from the previous substep, retained for Verlet averaging.
    pub acc: Vec3,
    pub angular_vel: Vec3,
    /// Unit rotation from the body frame to the world frame. The rotational
    /// update never renormalizes, so the norm may drift slightly.
    pub orientation: Quat,
    /// Inverse inertia tensor in the body frame, fixed at initialization.
    pub inv_inertia: Mat3,
}

impl RigidBody {
    #[must_use]
    pub const fn particle_range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// The complete mutable state of a simulation run.
///
/// Body particle ranges partition `[0, particles.len())` with no gaps or
/// overlaps; `init_world` establishes this and nothing afterwards changes it.
pub struct WorldState {
    pub particles: Vec<Particle>,
    pub bodies: Vec<RigidBody>,
}

impl WorldState {
    /// Reconstruct every particle's world position and velocity from its
    /// body's transform: `x = pos + R r0`, `v = vel + ω × (R r0)`.
    pub fn sync_particles(&mut self) {
        for b in 0..self.bodies.len() {
            let body = self.bodies[b];
            for particle in &mut self.particles[body.start..body.end] {
                let r = body.orientation.rotate(particle.rest_offset);
                particle.pos = body.pos + r;
                particle.vel = body.vel + body.angular_vel.cross(r);
            }
        }
    }

    /// Current particle world positions, in particle index order. For the
    /// renderer; must not be called while a frame is being advanced.
    pub fn particle_positions(&self) -> impl ExactSizeIterator<Item = Vec3> + '_ {
        self.particles.iter().map(|p| p.pos)
    }
}
