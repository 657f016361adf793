//! Frame driver.
//!
//! [`Simulation`] owns the world state and advances it a fixed number of
//! substeps per external frame request. Each substep runs four strictly
//! ordered phases; every phase reads only what the previous phases produced,
//! so within a phase bodies are independent of each other.

use crate::builder::init_world;
use crate::collision::{
    accumulate_contact_forces, boundary_force, AllPairs, BodyForces, CandidatePairs,
};
use crate::error::PhysicsError;
use crate::integrator::{integrate_angular, integrate_linear, predict_positions};
use crate::params::SimParams;
use crate::types::Vec3;
use crate::world::WorldState;

/// A running simulation: world state plus the fixed configuration and the
/// pair source used for contact detection.
pub struct Simulation {
    pub world: WorldState,
    pub params: SimParams,
    pairs: Box<dyn CandidatePairs>,
    /// Per-body force/torque scratch, reused across substeps.
    forces: Vec<BodyForces>,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl Simulation {
    /// Build a simulation with `body_count` bodies. The seed fixes the
    /// initial velocity perturbation, so equal seeds reproduce equal runs.
    ///
    /// # Errors
    ///
    /// Fails fast on invalid parameters or an unsupported cluster size.
    pub fn new(
        body_count: usize,
        particles_per_body: usize,
        params: SimParams,
        seed: u64,
    ) -> Result<Self, PhysicsError> {
        let mut rng = fastrand::Rng::with_seed(seed);
        let world = init_world(body_count, particles_per_body, &params, &mut rng)?;
        let body_count = world.bodies.len();
        Ok(Self {
            world,
            params,
            pairs: Box::new(AllPairs),
            forces: vec![BodyForces::ZERO; body_count],
        })
    }

    /// Single motionless body at `(0, height, 0)` under default parameters;
    /// a convenient starting point for tests.
    ///
    /// # Panics
    ///
    /// Never panics; default parameters are valid.
    #[must_use]
    pub fn new_single_body(height: f32) -> Self {
        let params = SimParams::default();
        let mut sim = Self::new(1, crate::builder::PARTICLES_PER_BODY, params, 0)
            .expect("default parameters are valid");
        let body = &mut sim.world.bodies[0];
        body.pos = Vec3::new(0.0, height, 0.0);
        body.vel = Vec3::ZERO;
        // Seed the retained acceleration with gravity so the first Verlet
        // step already sees the steady-state value.
        body.acc = Vec3::new(0.0, -params.gravity, 0.0);
        sim.world.sync_particles();
        sim
    }

    /// Swap the candidate pair source (e.g. for a spatial broad-phase).
    pub fn set_pair_source(&mut self, pairs: Box<dyn CandidatePairs>) {
        self.pairs = pairs;
    }

    /// One fixed-timestep physics update, in strict phase order:
    /// position prediction, particle reconstruction, force accumulation,
    /// integration finalization.
    pub fn substep(&mut self) {
        let dt = self.params.dt;

        predict_positions(&mut self.world.bodies, dt);
        self.world.sync_particles();

        for f in &mut self.forces {
            *f = BodyForces::ZERO;
        }
        let pairs = self.pairs.candidate_pairs(&self.world);
        accumulate_contact_forces(&self.world, &pairs, &self.params, &mut self.forces);
        for b in 0..self.world.bodies.len() {
            self.forces[b].force += boundary_force(&self.world, b, &self.params);
        }

        for (body, f) in self.world.bodies.iter_mut().zip(&self.forces) {
            integrate_linear(body, f.force, &self.params);
            integrate_angular(body, f.torque, dt);
        }
    }

    /// Advance one displayed frame: `substeps_per_frame` substeps.
    pub fn advance_frame(&mut self) {
        for _ in 0..self.params.substeps_per_frame {
            self.substep();
        }
    }

    /// Particle world positions for the renderer. Only valid between frame
    /// calls, never while one is in flight.
    pub fn particle_positions(&self) -> impl ExactSizeIterator<Item = Vec3> + '_ {
        self.world.particle_positions()
    }
}
