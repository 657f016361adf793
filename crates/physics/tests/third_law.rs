use physics::collision::{accumulate_contact_forces, AllPairs, BodyForces, CandidatePairs};
use physics::{init_world, pair_force, SimParams, Vec3, PARTICLES_PER_BODY};

#[test]
fn pair_forces_are_equal_and_opposite() {
    let params = SimParams::default();
    let xi = Vec3::new(0.0, 0.0, 0.0);
    let xj = Vec3::new(0.05, 0.02, -0.01);
    let vi = Vec3::new(0.1, 0.2, 0.0);
    let vj = Vec3::new(-0.3, 0.0, 0.1);

    let f_ij = pair_force(xi, xj, vi, vj, &params).expect("particles overlap");
    let f_ji = pair_force(xj, xi, vj, vi, &params).expect("particles overlap");
    assert!((f_ij + f_ji).length() < 1e-6, "{f_ij:?} vs {f_ji:?}");
}

#[test]
fn separated_particles_exert_no_force() {
    let params = SimParams::default();
    let f = pair_force(
        Vec3::ZERO,
        Vec3::new(params.radius * 2.0, 0.0, 0.0),
        Vec3::ZERO,
        Vec3::ZERO,
        &params,
    );
    assert!(f.is_none());
}

#[test]
fn coincident_particles_are_skipped() {
    // Zero distance leaves the contact normal undefined; the contact must
    // be dropped instead of yielding NaN.
    let params = SimParams::default();
    let p = Vec3::new(0.3, -0.1, 0.2);
    assert!(pair_force(p, p, Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), &params).is_none());
}

#[test]
fn swapped_pair_source_changes_detection_not_the_contract() {
    use physics::{Simulation, WorldState};

    // A broad-phase that finds nothing: overlapping bodies must then fall
    // freely, proving force accumulation depends only on the pairs fed in.
    struct NoPairs;
    impl CandidatePairs for NoPairs {
        fn candidate_pairs(&self, _world: &WorldState) -> Vec<(usize, usize)> {
            Vec::new()
        }
    }

    let params = SimParams {
        gravity: 0.0,
        ..SimParams::default()
    };
    let mut sim = Simulation::new(2, PARTICLES_PER_BODY, params, 5).unwrap();
    sim.world.bodies[0].pos = Vec3::new(0.0, 0.2, 0.0);
    sim.world.bodies[0].vel = Vec3::ZERO;
    sim.world.bodies[1].pos = Vec3::new(0.05, 0.2, 0.0);
    sim.world.bodies[1].vel = Vec3::ZERO;
    sim.world.sync_particles();
    sim.set_pair_source(Box::new(NoPairs));

    sim.advance_frame();

    assert!(sim.world.bodies[0].vel.length() < 1e-6, "phantom contact fired");
}

#[test]
fn contact_forces_cancel_across_two_bodies() {
    let params = SimParams::default();
    let mut rng = fastrand::Rng::with_seed(21);
    let mut world = init_world(2, PARTICLES_PER_BODY, &params, &mut rng).unwrap();

    // Force the clusters into overlap, away from every boundary.
    world.bodies[0].pos = Vec3::new(0.0, 0.2, 0.0);
    world.bodies[1].pos = Vec3::new(0.05, 0.2, 0.0);
    world.sync_particles();

    let pairs = AllPairs.candidate_pairs(&world);
    assert!(!pairs.is_empty(), "setup should produce contacts");

    let mut forces = vec![BodyForces::ZERO; 2];
    accumulate_contact_forces(&world, &pairs, &params, &mut forces);

    let net = forces[0].force + forces[1].force;
    assert!(net.length() < 1e-4, "net contact force {net:?}");
    assert!(forces[0].force.length() > 0.0);
}
