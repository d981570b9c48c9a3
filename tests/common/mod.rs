use std::sync::Once;

use leaderboard::model::{registry::RankedRegistry, simulation::seed};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        std::env::set_var("RUST_LOG", "warn");
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Seeded RNG for reproducible results
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Default-domain registry holding `user_1..=user_{count}`.
pub fn seeded_registry(count: usize) -> RankedRegistry {
    let registry = RankedRegistry::default();
    seed(&registry, count, &mut seeded_rng(727));
    registry
}
