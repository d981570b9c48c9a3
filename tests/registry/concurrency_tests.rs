use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc
    },
    thread
};

use leaderboard::model::{rating_domain::RatingDomain, registry::RankedRegistry, simulation::seed_username};
use rand::Rng;
use rayon::prelude::*;

use crate::common::{init_test_env, seeded_registry, seeded_rng};

const WRITERS: usize = 8;
const READERS: usize = 4;
const UPDATES_PER_WRITER: usize = 2_000;

/// Writers update disjoint users while readers continuously check that the
/// distribution accounts for every member.
#[test]
fn test_concurrent_upserts_preserve_distribution() {
    init_test_env();
    let registry = Arc::new(seeded_registry(100));
    let writers_done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..READERS)
        .map(|reader| {
            let registry = Arc::clone(&registry);
            let writers_done = Arc::clone(&writers_done);

            thread::spawn(move || {
                let mut observations = 0usize;
                while !writers_done.load(Ordering::Acquire) || observations == 0 {
                    assert!(registry.is_consistent(), "distribution out of sync with membership");

                    let user = registry
                        .get_user(&seed_username(reader + 1))
                        .expect("seeded user must exist");
                    assert!(user.rank >= 1);
                    assert!(user.rank <= registry.len());

                    let top = registry.top_n(10);
                    assert!(top.windows(2).all(|w| w[0].rating >= w[1].rating));

                    observations += 1;
                }
                observations
            })
        })
        .collect();

    let writers: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let registry = Arc::clone(&registry);

            thread::spawn(move || {
                let mut rng = seeded_rng(writer as u64);
                for i in 0..UPDATES_PER_WRITER {
                    // Writer w owns every id congruent to w modulo WRITERS
                    let username = format!("writer_{}", (i % 250) * WRITERS + writer);
                    registry.upsert(&username, rng.random_range(0..6000));
                }
            })
        })
        .collect();

    for handle in writers {
        handle.join().expect("writer panicked");
    }
    writers_done.store(true, Ordering::Release);

    for handle in readers {
        assert!(handle.join().expect("reader panicked") > 0);
    }

    assert_eq!(registry.len(), 100 + WRITERS * 250);
    assert_eq!(registry.distribution_total(), registry.len());
    assert!(registry.is_consistent());
}

/// Parallel upserts to disjoint users end in the same standings as applying them in order.
#[test]
fn test_parallel_upserts_match_sequential() {
    init_test_env();
    let mut rng = seeded_rng(1);
    let updates: Vec<(String, i64)> = (1..=5_000)
        .map(|n| (seed_username(n), rng.random_range(-500..6000)))
        .collect();

    let parallel = RankedRegistry::default();
    updates
        .par_iter()
        .for_each(|(username, rating)| parallel.upsert(username, *rating));

    let sequential = RankedRegistry::default();
    for (username, rating) in &updates {
        sequential.upsert(username, *rating);
    }

    assert!(parallel.is_consistent());
    assert_eq!(parallel.len(), 5_000);
    assert_eq!(parallel.top_n(5_000), sequential.top_n(5_000));
}

/// Many threads fighting over a handful of users never duplicate membership.
#[test]
fn test_contended_upserts_same_users() {
    init_test_env();
    let registry = RankedRegistry::new(RatingDomain::new(0, 100).unwrap());

    thread::scope(|scope| {
        for t in 0..WRITERS {
            let registry = &registry;
            scope.spawn(move || {
                let mut rng = seeded_rng(100 + t as u64);
                for _ in 0..UPDATES_PER_WRITER {
                    let username = format!("hot_{}", rng.random_range(0..5));
                    registry.upsert(&username, rng.random_range(0..=100));
                }
            });
        }

        scope.spawn(|| {
            for _ in 0..UPDATES_PER_WRITER {
                assert!(registry.is_consistent());
                assert!(registry.len() <= 5);
            }
        });
    });

    assert_eq!(registry.len(), 5);
    assert_eq!(registry.distribution_total(), 5);
}
