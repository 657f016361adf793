use physics::{init_world, Mat3, SimParams, PARTICLES_PER_BODY};

fn leading_minors(m: &Mat3) -> [f32; 3] {
    let r = m.rows;
    [
        r[0][0],
        r[0][0] * r[1][1] - r[0][1] * r[1][0],
        m.determinant(),
    ]
}

#[test]
fn inverse_inertia_is_symmetric_positive_definite() {
    let mut rng = fastrand::Rng::with_seed(3);
    let world = init_world(4, PARTICLES_PER_BODY, &SimParams::default(), &mut rng).unwrap();

    for body in &world.bodies {
        let inv = body.inv_inertia;
        for r in 0..3 {
            for c in 0..3 {
                assert!(
                    (inv.rows[r][c] - inv.rows[c][r]).abs() < 1e-4,
                    "asymmetric at ({r},{c})"
                );
            }
        }
        // Sylvester's criterion; the inverse of an SPD matrix is SPD.
        for (k, minor) in leading_minors(&inv).iter().enumerate() {
            assert!(*minor > 0.0, "leading minor {k} not positive: {minor}");
        }
    }
}

#[test]
fn inverse_inertia_round_trips_to_cluster_inertia() {
    let mut rng = fastrand::Rng::with_seed(3);
    let world = init_world(1, PARTICLES_PER_BODY, &SimParams::default(), &mut rng).unwrap();
    let body = &world.bodies[0];

    // Rebuild I from the rest offsets and check I * I⁻¹ ≈ E.
    let mass = SimParams::default().particle_mass;
    let mut inertia = Mat3::ZERO;
    for i in body.particle_range() {
        let r = world.particles[i].rest_offset;
        inertia = inertia + (Mat3::IDENTITY * r.length_squared() - Mat3::outer(r, r)) * mass;
    }
    let product = inertia * body.inv_inertia;
    for r in 0..3 {
        for c in 0..3 {
            let expected = if r == c { 1.0 } else { 0.0 };
            assert!((product.rows[r][c] - expected).abs() < 1e-4);
        }
    }
}
