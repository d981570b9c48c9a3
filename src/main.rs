use std::sync::Arc;

use clap::Parser;
use leaderboard::{
    api::{self, AppState},
    args::Args,
    model::{registry::RankedRegistry, simulation::seed}
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .init();

    let domain = match args.rating_domain() {
        Ok(domain) => domain,
        Err(e) => {
            error!("{}", e);
            error!("Application cannot start without a valid rating domain");
            std::process::exit(1);
        }
    };
    info!("Rating domain: [{}, {}]", domain.min(), domain.max());

    let registry = Arc::new(RankedRegistry::new(domain));
    seed(&registry, args.seed_count, &mut rand::rng());

    let state = AppState::new(registry, args.simulation_settings());
    api::serve(state, &args.address()).await?;

    info!("Server stopped");
    Ok(())
}
