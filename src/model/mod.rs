//! Leaderboard core: the rating domain, the ranked registry and the drivers
//! that populate it.
pub mod constants;
pub mod error;
pub mod rating_domain;
pub mod registry;
pub mod simulation;
pub mod structures;

pub use error::RegistryError;
pub use rating_domain::RatingDomain;
pub use registry::RankedRegistry;
pub use structures::user::User;
