use physics::{init_world, SimParams, PARTICLES_PER_BODY};

#[test]
fn body_ranges_tile_the_particle_array() {
    for body_count in [1, 2, 5, 11] {
        let mut rng = fastrand::Rng::with_seed(9);
        let world = init_world(body_count, PARTICLES_PER_BODY, &SimParams::default(), &mut rng)
            .unwrap();

        assert_eq!(world.bodies.len(), body_count);
        assert_eq!(world.particles.len(), body_count * PARTICLES_PER_BODY);

        let mut next = 0;
        for (b, body) in world.bodies.iter().enumerate() {
            assert_eq!(body.start, next, "gap or overlap before body {b}");
            assert_eq!(body.end - body.start, PARTICLES_PER_BODY);
            for i in body.particle_range() {
                assert_eq!(world.particles[i].body, b);
            }
            next = body.end;
        }
        assert_eq!(next, world.particles.len());
    }
}
