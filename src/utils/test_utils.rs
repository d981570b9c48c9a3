use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::model::registry::RankedRegistry;

/// Builds a registry over the default domain holding exactly `users`, upserted in order.
pub fn generate_registry(users: &[(&str, i64)]) -> RankedRegistry {
    let registry = RankedRegistry::default();

    for (username, rating) in users {
        registry.upsert(username, *rating);
    }

    registry
}

/// Seeded RNG for reproducible results
pub fn seeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}
