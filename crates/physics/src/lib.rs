#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Particle-cluster rigid body simulation
//!
//! A small penalty-based physics engine. Every rigid body is a fixed
//! cluster of three point particles; bodies collide with each other through
//! spring-damper contacts between particles of different bodies, and with a
//! bounded domain (a floor and two side walls) through synthetic
//! velocity-reversal forces.
//!
//! ## Key components
//!
//! - [`types`] — `Vec3`, `Quat`, and `Mat3` value types with the named
//!   operations the physics routines need.
//! - [`builder`] — initial particle layout, body placement, and precomputed
//!   inverse inertia tensors.
//! - [`collision`] — per-substep force and torque accumulation from particle
//!   pairs and boundary violations.
//! - [`integrator`] — velocity-Verlet translation and quaternion-based
//!   rotation.
//! - [`simulation`] — the [`Simulation`] frame driver tying the phases
//!   together.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{SimParams, Simulation};
//!
//! let mut sim = Simulation::new(11, 3, SimParams::default(), 42).unwrap();
//! sim.advance_frame();
//! let positions: Vec<_> = sim.particle_positions().collect();
//! assert_eq!(positions.len(), 33);
//! ```
//!
//! The external renderer is a collaborator, not part of this crate: it calls
//! [`Simulation::advance_frame`] once per displayed frame and then reads
//! [`Simulation::particle_positions`] to draw points.

pub mod builder;
pub mod collision;
pub mod error;
pub mod integrator;
pub mod params;
pub mod simulation;
pub mod types;
pub mod world;

pub use builder::{init_world, PARTICLES_PER_BODY};
pub use collision::{pair_force, AllPairs, BodyForces, CandidatePairs};
pub use error::PhysicsError;
pub use params::SimParams;
pub use simulation::Simulation;
pub use types::{Mat3, Quat, Vec3};
pub use world::{Particle, RigidBody, WorldState};
