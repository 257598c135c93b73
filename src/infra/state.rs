use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sqlx::PgPool;

use crate::adapter::db::gateway::profile::ProfileGateway;
use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interactors::profile::{
    GetProfileInteractor, GetProfileListInteractor, GetRandomProfileInteractor, ImportProfilesInteractor,
    ProfileImporter, SeedProfilesInteractor,
};
use crate::application::interface::fetcher::ProfileFetcher;
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
    pub fetcher: Arc<dyn ProfileFetcher>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

#[async_trait]
pub trait FromAppState: Sized {
    async fn from_app_state(state: &AppState) -> AppResult<Self>;
}

fn profile_importer(state: &AppState, session: &SqlxSession) -> ProfileImporter {
    ProfileImporter::new(
        Arc::new(session.clone()),
        Arc::new(ProfileGateway::new(session.clone())),
        state.fetcher.clone(),
    )
}

// GetProfileListInteractor
#[async_trait]
impl FromAppState for GetProfileListInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session);

        Ok(GetProfileListInteractor::new(Arc::new(profile_gateway)))
    }
}

impl<S> FromRequestParts<S> for GetProfileListInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetProfileListInteractor::from_app_state(&app_state).await
    }
}

// GetProfileInteractor
#[async_trait]
impl FromAppState for GetProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session);

        Ok(GetProfileInteractor::new(Arc::new(profile_gateway)))
    }
}

impl<S> FromRequestParts<S> for GetProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetProfileInteractor::from_app_state(&app_state).await
    }
}

// GetRandomProfileInteractor
#[async_trait]
impl FromAppState for GetRandomProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(GetRandomProfileInteractor::new(
            Arc::new(profile_gateway),
            profile_importer(state, &session),
        ))
    }
}

impl<S> FromRequestParts<S> for GetRandomProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetRandomProfileInteractor::from_app_state(&app_state).await
    }
}

// ImportProfilesInteractor
#[async_trait]
impl FromAppState for ImportProfilesInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());

        Ok(ImportProfilesInteractor::new(profile_importer(state, &session)))
    }
}

impl<S> FromRequestParts<S> for ImportProfilesInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        ImportProfilesInteractor::from_app_state(&app_state).await
    }
}

// SeedProfilesInteractor: bootstrap only, never extracted from a request.
#[async_trait]
impl FromAppState for SeedProfilesInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(SeedProfilesInteractor::new(
            Arc::new(profile_gateway),
            profile_importer(state, &session),
            state.config.seed.initial_count,
        ))
    }
}
