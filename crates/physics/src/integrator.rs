//! Numerical integration of body state.
//!
//! Translation uses velocity Verlet: positions advance before forces are
//! recomputed, velocities advance on the average of the previous and the
//! fresh acceleration. Rotation integrates angular velocity from torque and
//! composes an incremental quaternion onto the orientation.

use crate::params::SimParams;
use crate::types::{Mat3, Vec3};
use crate::world::RigidBody;

/// Below this angular speed the rotation axis is numerically undefined and
/// the orientation update is skipped.
const ANGULAR_EPSILON: f32 = 1e-5;

/// Verlet pre-step for all bodies, run before forces are recomputed:
/// `pos += vel dt + ½ acc dt²`.
pub fn predict_positions(bodies: &mut [RigidBody], dt: f32) {
    for body in bodies {
        body.pos += body.vel * dt + body.acc * (0.5 * dt * dt);
    }
}

/// Verlet post-step for one body. Converts the net force to an acceleration
/// with the fixed inverse particle mass, adds gravity, then averages the
/// previous and new accelerations into the velocity. The new acceleration is
/// retained for the next substep's pre-step.
pub fn integrate_linear(body: &mut RigidBody, net_force: Vec3, params: &SimParams) {
    let mut new_acc = net_force / params.particle_mass;
    new_acc.y -= params.gravity;
    body.vel += (body.acc + new_acc) * (0.5 * params.dt);
    body.acc = new_acc;
}

/// Inverse inertia tensor rotated into the world frame: `R I⁻¹ Rᵀ`.
#[must_use]
pub fn world_inv_inertia(body: &RigidBody) -> Mat3 {
    let rot = body.orientation.to_mat3();
    rot * body.inv_inertia * rot.transpose()
}

/// Rotational update for one body. The torque is mapped through the
/// world-frame inverse inertia before it feeds the angular velocity, then an
/// incremental rotation about the (normalized) angular velocity axis is
/// composed onto the orientation. The orientation is not renormalized.
pub fn integrate_angular(body: &mut RigidBody, torque: Vec3, dt: f32) {
    body.angular_vel += world_inv_inertia(body).mul_vec(torque) * dt;

    let speed = body.angular_vel.length();
    if speed < ANGULAR_EPSILON {
        return;
    }
    let increment = crate::types::Quat::from_axis_angle(body.angular_vel / speed, speed * dt);
    body.orientation = increment.mul(body.orientation);
}
