//! Simulation parameters.
//!
//! All tunables are fixed at initialization; nothing here is mutated while
//! the simulation runs.

use crate::error::PhysicsError;

/// Parameters for one simulation run.
#[derive(Copy, Clone, Debug)]
pub struct SimParams {
    /// Substep duration in seconds.
    pub dt: f32,
    /// Particle collision radius. A contact fires when two particles from
    /// different bodies come closer than this; repulsion scales with the
    /// overlap relative to `2 * radius`.
    pub radius: f32,
    /// Downward gravitational acceleration.
    pub gravity: f32,
    /// Spring stiffness of the penalty contact.
    pub stiffness: f32,
    /// Relative-velocity damping coefficient.
    pub damping: f32,
    /// Tangential (shear) coefficient.
    pub shear: f32,
    /// Mass of a single particle; also the inverse-mass scale applied to
    /// net body forces.
    pub particle_mass: f32,
    /// Height of the floor plane.
    pub floor_y: f32,
    /// Half-width of the domain; walls sit at `-wall_x` and `+wall_x`.
    pub wall_x: f32,
    /// Fraction of a substep over which a boundary-violating velocity is
    /// converted into a corrective force.
    pub reversal_window: f32,
    /// Gain applied to the boundary corrective force.
    pub reversal_gain: f32,
    /// Substeps executed per displayed frame.
    pub substeps_per_frame: u32,
}

impl SimParams {
    /// Reject configurations that would produce undefined behavior
    /// mid-simulation.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.dt.is_nan() || self.dt <= 0.0 {
            return Err(PhysicsError::InvalidTimestep(self.dt));
        }
        if self.radius < 0.0 {
            return Err(PhysicsError::InvalidRadius(self.radius));
        }
        if self.substeps_per_frame == 0 {
            return Err(PhysicsError::InvalidSubstepCount);
        }
        Ok(())
    }
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            dt: 1.0 / 600.0,
            radius: 0.1,
            gravity: 0.8,
            stiffness: 300.0,
            damping: 30.0,
            shear: 1.0,
            particle_mass: 5.0,
            floor_y: -0.5,
            wall_x: 0.8,
            reversal_window: 0.2,
            reversal_gain: 1.5,
            substeps_per_frame: 10,
        }
    }
}
