use async_trait::async_trait;

use crate::application::dto::profile::RawProfileRecord;

/// Source of freshly generated person records.
///
/// Implementations never fail: any upstream problem is logged and reported
/// as an empty batch.
#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    async fn fetch(&self, count: u32) -> Vec<RawProfileRecord>;
}
