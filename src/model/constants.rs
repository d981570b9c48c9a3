// Rating domain
pub const DEFAULT_MIN_RATING: i32 = 100;
pub const DEFAULT_MAX_RATING: i32 = 5000;
// One bucket per rating value, so the domain width bounds memory and rank cost.
pub const MAX_DOMAIN_WIDTH: usize = 1_000_000;
// Queries
pub const SEARCH_RESULT_LIMIT: usize = 20;
pub const DEFAULT_LEADERBOARD_LIMIT: i64 = 50;
pub const MAX_LEADERBOARD_LIMIT: i64 = 500;
// Seeding & simulation
pub const SEED_USERNAME_PREFIX: &str = "user_";
pub const DEFAULT_SEED_COUNT: usize = 10_000;
pub const DEFAULT_SIMULATE_UPDATES: usize = 50;
pub const DEFAULT_SIMULATE_ID_RANGE: usize = 10_000;
pub const PROGRESS_BAR_THRESHOLD: usize = 1_000;
