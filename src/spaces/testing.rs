//! Space test utilities
use super::Space;
use rand::prelude::*;

/// Check that space contains samples it generates
pub fn check_contains_samples<S: Space>(space: &S, num_samples: u32) {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..num_samples {
        let element = space.sample(&mut rng);
        assert!(space.contains(&element));
    }
}
