//! Initial world construction.
//!
//! Builds the per-body particle clusters, places the bodies, and precomputes
//! each body's inverse inertia tensor from its rest-frame particle layout.

use crate::error::PhysicsError;
use crate::params::SimParams;
use crate::types::{Mat3, Quat, Vec3};
use crate::world::{Particle, RigidBody, WorldState};

/// Every body carries this many particles for the lifetime of a simulation.
pub const PARTICLES_PER_BODY: usize = 3;

/// Local rest offsets of a body's particle cluster, a small triangle around
/// the center of mass (offsets sum to zero, and the three points are not
/// collinear, so the inertia tensor is invertible).
fn cluster_offsets(radius: f32) -> [Vec3; PARTICLES_PER_BODY] {
    [
        Vec3::new(0.1 * radius, -0.9 * radius, 0.0),
        Vec3::new(-0.2 * radius, 0.0, 0.0),
        Vec3::new(0.1 * radius, 0.9 * radius, 0.0),
    ]
}

/// Inverse inertia tensor of a point cluster with uniform particle mass:
/// `I = Σ m (|r|² E − r rᵀ)`, inverted once.
fn inverse_inertia(
    offsets: &[Vec3],
    mass: f32,
    body_index: usize,
) -> Result<Mat3, PhysicsError> {
    let mut inertia = Mat3::ZERO;
    for &r in offsets {
        inertia = inertia + (Mat3::IDENTITY * r.length_squared() - Mat3::outer(r, r)) * mass;
    }
    inertia
        .inverse()
        .ok_or(PhysicsError::DegenerateInertia(body_index))
}

/// Build the initial world: `body_count` bodies placed along a line with a
/// small stagger, each with the fixed three-particle cluster, one randomized
/// velocity axis, zero angular velocity, and identity orientation.
///
/// The RNG is injected so callers can fix the seed and reproduce a run.
///
/// # Errors
///
/// Fails fast on invalid parameters or when `particles_per_body` does not
/// match the fixed cluster size.
pub fn init_world(
    body_count: usize,
    particles_per_body: usize,
    params: &SimParams,
    rng: &mut fastrand::Rng,
) -> Result<WorldState, PhysicsError> {
    params.validate()?;
    if particles_per_body != PARTICLES_PER_BODY {
        return Err(PhysicsError::ClusterSizeMismatch {
            requested: particles_per_body,
            supported: PARTICLES_PER_BODY,
        });
    }

    let radius = params.radius;
    let offsets = cluster_offsets(radius);

    let mut particles = Vec::with_capacity(body_count * PARTICLES_PER_BODY);
    let mut bodies = Vec::with_capacity(body_count);

    for b in 0..body_count {
        let start = particles.len();
        for &rest_offset in &offsets {
            particles.push(Particle {
                rest_offset,
                pos: Vec3::ZERO,
                vel: Vec3::ZERO,
                body: b,
            });
        }

        #[allow(clippy::cast_precision_loss)]
        let stagger = b as f32;
        bodies.push(RigidBody {
            start,
            end: particles.len(),
            pos: Vec3::new(
                -0.5 + 0.9 * radius * stagger,
                0.2 * radius * stagger + radius,
                0.0,
            ),
            vel: Vec3::new(-0.2, rng.f32() * 0.5, 0.0),
            acc: Vec3::ZERO,
            angular_vel: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            inv_inertia: inverse_inertia(&offsets, params.particle_mass, b)?,
        });
    }

    let mut world = WorldState { particles, bodies };
    world.sync_particles();

    tracing::debug!(
        bodies = body_count,
        particles = world.particles.len(),
        "world initialized"
    );
    Ok(world)
}
