use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard}
};

use itertools::Itertools;
use tracing::{trace, warn};

use crate::model::{
    constants::SEARCH_RESULT_LIMIT, error::RegistryError, rating_domain::RatingDomain, structures::user::User
};

/// Membership table and bucket distribution. Always guarded together so that
/// `buckets.iter().sum() == members.len()` holds for every reader.
struct Standings {
    members: HashMap<String, i32>,
    // buckets[domain.index_of(r)] = number of members rated exactly r
    buckets: Vec<usize>
}

impl Standings {
    /// One more than the number of members rated strictly above `rating`.
    fn rank_of(&self, domain: &RatingDomain, rating: i32) -> usize {
        let above = domain.index_of(rating) + 1;
        1 + self.buckets[above..].iter().sum::<usize>()
    }
}

/// Live leaderboard. Ranks are derived on read as a suffix sum over the
/// rating distribution, so their cost depends on the width of the rating
/// domain and not on the number of users.
///
/// All operations take the internal lock for their own duration only:
/// `upsert` exclusively, every query shared. Returned values are owned
/// snapshots.
pub struct RankedRegistry {
    domain: RatingDomain,
    standings: RwLock<Standings>
}

impl Default for RankedRegistry {
    fn default() -> Self {
        Self::new(RatingDomain::default())
    }
}

impl RankedRegistry {
    pub fn new(domain: RatingDomain) -> RankedRegistry {
        RankedRegistry {
            domain,
            standings: RwLock::new(Standings {
                members: HashMap::new(),
                buckets: vec![0; domain.len()]
            })
        }
    }

    pub fn domain(&self) -> RatingDomain {
        self.domain
    }

    // Writers never panic between the two bucket updates, so a poisoned lock
    // still guards consistent standings.
    fn read(&self) -> RwLockReadGuard<'_, Standings> {
        self.standings.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Standings> {
        self.standings.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts `identifier` or moves it to a new rating. The rating is clamped
    /// into the domain first.
    ///
    /// Empty identifiers are ignored.
    pub fn upsert(&self, identifier: &str, rating: i64) {
        if identifier.is_empty() {
            warn!("Ignoring rating update for an empty identifier");
            return;
        }

        let rating = self.domain.clamp(rating);
        let mut standings = self.write();
        let Standings { members, buckets } = &mut *standings;

        match members.get_mut(identifier) {
            Some(current) => {
                buckets[self.domain.index_of(*current)] -= 1;
                *current = rating;
            }
            None => {
                trace!(identifier, rating, "New leaderboard member");
                members.insert(identifier.to_owned(), rating);
            }
        }

        buckets[self.domain.index_of(rating)] += 1;
    }

    /// Rank a user holding `rating` would have right now. Ties share a rank.
    pub fn rank_of(&self, rating: i64) -> usize {
        let rating = self.domain.clamp(rating);
        self.read().rank_of(&self.domain, rating)
    }

    pub fn get_user(&self, identifier: &str) -> Result<User, RegistryError> {
        let standings = self.read();

        match standings.members.get(identifier) {
            Some(&rating) => Ok(User::new(identifier, rating, standings.rank_of(&self.domain, rating))),
            None => Err(RegistryError::NotFound(identifier.to_owned()))
        }
    }

    /// The best `limit` users, by rating descending then username ascending.
    ///
    /// Ranks are assigned while walking the sorted snapshot: the first user at
    /// a given rating sits at position `1 + users strictly above`, which is
    /// exactly [`RankedRegistry::rank_of`] for that rating.
    pub fn top_n(&self, limit: i64) -> Vec<User> {
        if limit <= 0 {
            return Vec::new();
        }

        let standings = self.read();
        let take = usize::try_from(limit).unwrap_or(usize::MAX).min(standings.members.len());

        let mut users = Vec::with_capacity(take);
        let mut rank = 0;
        let mut previous_rating = None;

        let sorted = standings
            .members
            .iter()
            .sorted_unstable_by(|(name_a, rating_a), (name_b, rating_b)| {
                rating_b.cmp(rating_a).then_with(|| name_a.cmp(name_b))
            })
            .take(take);

        for (position, (username, &rating)) in sorted.enumerate() {
            if previous_rating != Some(rating) {
                rank = position + 1;
                previous_rating = Some(rating);
            }

            users.push(User::new(username, rating, rank));
        }

        users
    }

    /// Case-insensitive substring search over usernames.
    ///
    /// At most [`SEARCH_RESULT_LIMIT`] matches are collected in table order and
    /// only then sorted by rank and username. With more matches than the limit
    /// the result is not guaranteed to be the best-ranked ones.
    pub fn search(&self, query: &str) -> Vec<User> {
        let needle = query.to_lowercase();
        let standings = self.read();

        standings
            .members
            .iter()
            .filter(|(username, _)| username.to_lowercase().contains(&needle))
            .take(SEARCH_RESULT_LIMIT)
            .map(|(username, &rating)| User::new(username, rating, standings.rank_of(&self.domain, rating)))
            .sorted_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.username.cmp(&b.username)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum over the bucket distribution.
    pub fn distribution_total(&self) -> usize {
        self.read().buckets.iter().sum()
    }

    /// Whether the distribution accounts for every member, checked under one lock.
    pub fn is_consistent(&self) -> bool {
        let standings = self.read();
        standings.buckets.iter().sum::<usize>() == standings.members.len()
    }
}
