use rand::Rng;
use tracing::{debug, info};

use crate::{
    model::{
        constants::{DEFAULT_SIMULATE_ID_RANGE, DEFAULT_SIMULATE_UPDATES, SEED_USERNAME_PREFIX},
        registry::RankedRegistry
    },
    utils::progress_utils::progress_bar
};

/// How much load one simulation run generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSettings {
    /// Upserts per run
    pub updates: usize,
    /// Updates target `user_1..=user_{id_range}`
    pub id_range: usize
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings {
            updates: DEFAULT_SIMULATE_UPDATES,
            id_range: DEFAULT_SIMULATE_ID_RANGE
        }
    }
}

/// Generated username for the `n`th synthetic user, starting at 1.
pub fn seed_username(n: usize) -> String {
    format!("{}{}", SEED_USERNAME_PREFIX, n)
}

/// Upserts `user_1..=user_{count}`, each with a rating drawn uniformly from the domain.
pub fn seed<R: Rng + ?Sized>(registry: &RankedRegistry, count: usize, rng: &mut R) {
    info!("Seeding {} users...", count);
    let domain = registry.domain();
    let bar = progress_bar(count as u64, "Seeding users".to_string());

    for n in 1..=count {
        registry.upsert(&seed_username(n), domain.sample(rng).into());

        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }
    info!("Seeding complete, {} users on the leaderboard", registry.len());
}

/// Emulates live activity: `settings.updates` random rating changes for
/// randomly picked synthetic users. Picked ids that were never seeded are
/// created. Returns the number of updates applied.
pub fn simulate<R: Rng + ?Sized>(registry: &RankedRegistry, settings: SimulationSettings, rng: &mut R) -> usize {
    if settings.id_range == 0 {
        return 0;
    }

    let domain = registry.domain();
    for _ in 0..settings.updates {
        let id = rng.random_range(1..=settings.id_range);
        registry.upsert(&seed_username(id), domain.sample(rng).into());
    }

    debug!("Simulated {} random updates", settings.updates);
    settings.updates
}
