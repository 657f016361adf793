//! Penalty force between two overlapping particles.

use crate::params::SimParams;
use crate::types::Vec3;

/// Force exerted on particle `i` by particle `j`, or `None` when the two are
/// not in contact.
///
/// A contact fires when the center distance drops below the collision
/// radius. Three terms are summed:
///
/// - repulsion along the contact normal, scaled by the overlap
///   `2 * radius - d`;
/// - damping along the full relative velocity (deliberately not projected
///   onto the normal);
/// - shear on the tangential remainder of the relative velocity.
///
/// Coincident centers leave the normal undefined, so that contact is
/// skipped rather than producing a NaN.
#[must_use]
pub fn pair_force(xi: Vec3, xj: Vec3, vi: Vec3, vj: Vec3, params: &SimParams) -> Option<Vec3> {
    let delta = xi - xj;
    let d = delta.length();
    if d >= params.radius || d == 0.0 {
        return None;
    }
    let normal = delta / d;

    let mut f = normal * (params.stiffness * (2.0 * params.radius - d));
    let rel_vel = vj - vi;
    f += rel_vel * params.damping;
    f += (rel_vel - normal * rel_vel.dot(normal)) * params.shear;
    Some(f)
}
