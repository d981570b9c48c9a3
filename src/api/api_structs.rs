use serde::{Deserialize, Serialize};

use crate::model::constants::{DEFAULT_LEADERBOARD_LIMIT, MAX_LEADERBOARD_LIMIT};

/// `GET /leaderboard?limit=N`
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    // Kept raw so a malformed value falls back to the default instead of rejecting the request.
    pub limit: Option<String>
}

impl LeaderboardQuery {
    /// Requested limit: defaults to 50 when missing or not a number, never above 500.
    /// Zero and negative values pass through and yield an empty leaderboard.
    pub fn limit(&self) -> i64 {
        self.limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
            .min(MAX_LEADERBOARD_LIMIT)
    }
}

/// `GET /search?q=...`
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>
}

/// `POST /users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertRequest {
    pub username: String,
    pub rating: i64
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SimulateResponse {
    pub message: String
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub users: usize
}
