use clap::Parser;

use crate::model::{
    constants::{
        DEFAULT_MAX_RATING, DEFAULT_MIN_RATING, DEFAULT_SEED_COUNT, DEFAULT_SIMULATE_ID_RANGE,
        DEFAULT_SIMULATE_UPDATES
    },
    error::RegistryError,
    rating_domain::RatingDomain,
    simulation::SimulationSettings
};

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Leaderboard Service",
    long_about = "Serves a live-ranked leaderboard of user ratings over HTTP"
)]
pub struct Args {
    /// Interface to bind the HTTP server to
    #[arg(long, env, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env, default_value_t = 8080)]
    pub port: u16,

    /// Number of synthetic users (user_1..user_N) created at startup
    #[arg(short, long, env, default_value_t = DEFAULT_SEED_COUNT)]
    pub seed_count: usize,

    /// Lowest legal rating. Lower ratings are saturated to this value.
    #[arg(long, env, default_value_t = DEFAULT_MIN_RATING, allow_negative_numbers = true)]
    pub min_rating: i32,

    /// Highest legal rating. Higher ratings are saturated to this value.
    #[arg(long, env, default_value_t = DEFAULT_MAX_RATING, allow_negative_numbers = true)]
    pub max_rating: i32,

    /// Number of random updates performed per /simulate call
    #[arg(long, env, default_value_t = DEFAULT_SIMULATE_UPDATES)]
    pub simulate_updates: usize,

    /// Simulated updates pick users from user_1..user_N
    #[arg(long, env, default_value_t = DEFAULT_SIMULATE_ID_RANGE)]
    pub simulate_id_range: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

impl Args {
    pub fn rating_domain(&self) -> Result<RatingDomain, RegistryError> {
        RatingDomain::new(self.min_rating, self.max_rating)
    }

    pub fn simulation_settings(&self) -> SimulationSettings {
        SimulationSettings {
            updates: self.simulate_updates,
            id_range: self.simulate_id_range
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
