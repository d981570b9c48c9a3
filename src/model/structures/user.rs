use serde::{Deserialize, Serialize};

/// A point-in-time view of one leaderboard entry.
///
/// `rank` is derived from the rating distribution when the snapshot is taken
/// and is never stored by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub rating: i32,
    pub rank: usize
}

impl User {
    pub fn new(username: &str, rating: i32, rank: usize) -> User {
        User {
            username: username.to_owned(),
            rating,
            rank
        }
    }
}
