use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{NewProfile, Profile};

#[async_trait]
pub trait ProfileWriter: Send + Sync {
    async fn insert(&self, profile: NewProfile) -> AppResult<Id<Profile>>;
}

#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn count(&self) -> AppResult<i64>;
    /// Newest first.
    async fn get_all(&self, limit: i64, offset: i64) -> AppResult<Vec<Profile>>;
    async fn find_by_id(&self, profile_id: &Id<Profile>) -> AppResult<Option<Profile>>;
    /// Row at `offset` in the store's default (unspecified) order.
    async fn find_at_offset(&self, offset: i64) -> AppResult<Option<Profile>>;
    /// Lowest id.
    async fn first(&self) -> AppResult<Option<Profile>>;
}
