//! Candidate pair enumeration.

use crate::world::WorldState;

/// Source of particle pairs worth testing for contact.
///
/// Implementations must only yield pairs whose particles belong to different
/// bodies, with `i < j`. The force accumulation downstream is independent of
/// how pairs are found, so a spatial grid or BVH can substitute for
/// [`AllPairs`] later.
pub trait CandidatePairs {
    fn candidate_pairs(&self, world: &WorldState) -> Vec<(usize, usize)>;
}

/// Exhaustive O(N²) scan over all cross-body particle pairs. Fine at the
/// small particle counts this simulation runs at.
pub struct AllPairs;

impl CandidatePairs for AllPairs {
    fn candidate_pairs(&self, world: &WorldState) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (b, body) in world.bodies.iter().enumerate() {
            for other in &world.bodies[b + 1..] {
                for i in body.particle_range() {
                    for j in other.particle_range() {
                        pairs.push((i, j));
                    }
                }
            }
        }
        pairs
    }
}
