use std::sync::Arc;

use tracing::{error, info};

use crate::adapter::fetcher::random_user::RandomUserClient;
use crate::application::interactors::profile::SeedProfilesInteractor;
use crate::infra::config::AppConfig;
use crate::infra::db::{init_db, run_migrations};
use crate::infra::state::{AppState, FromAppState};

pub mod app;
pub mod config;
pub mod constants;
pub mod db;
pub mod setup;
pub mod state;

pub async fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pool = init_db(config).await?;
    run_migrations(&pool).await?;
    let fetcher = RandomUserClient::new(&config.random_user);

    Ok(AppState {
        pool,
        config: Arc::new(config.clone()),
        fetcher: Arc::new(fetcher),
    })
}

/// One-shot bootstrap step: fills an empty store with the initial batch.
/// Failures are logged and never stop the server from starting.
pub async fn seed_profiles(state: &AppState) {
    if !state.config.seed.enabled {
        info!("Initial profile seeding disabled");
        return;
    }

    let result = match SeedProfilesInteractor::from_app_state(state).await {
        Ok(interactor) => interactor.execute().await,
        Err(err) => Err(err),
    };

    match result {
        Ok(Some(saved)) => info!("Seeded {} profiles", saved),
        Ok(None) => info!("Profiles already present, skipping initial load"),
        Err(err) => error!("Error during initial data loading: {}", err),
    }
}
