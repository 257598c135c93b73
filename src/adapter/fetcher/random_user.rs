use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};

use crate::application::dto::profile::RawProfileRecord;
use crate::application::interface::fetcher::ProfileFetcher;
use crate::infra::config::RandomUserConfig;

#[derive(Debug, Deserialize)]
struct RandomUserResponse {
    results: Vec<Value>,
}

/// Client for the randomuser.me API.
#[derive(Clone)]
pub struct RandomUserClient {
    client: reqwest::Client,
    base_url: String,
}

impl RandomUserClient {
    pub fn new(config: &RandomUserConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        Self {
            client: builder.build().unwrap_or_else(|_| reqwest::Client::new()),
            base_url: config.base_url.clone(),
        }
    }

    async fn request(&self, count: u32) -> reqwest::Result<RandomUserResponse> {
        self.client
            .get(&self.base_url)
            .query(&[("results", count)])
            .send()
            .await?
            .error_for_status()?
            .json::<RandomUserResponse>()
            .await
    }
}

#[async_trait]
impl ProfileFetcher for RandomUserClient {
    async fn fetch(&self, count: u32) -> Vec<RawProfileRecord> {
        match self.request(count).await {
            Ok(response) => {
                info!("Fetched {} of {} requested users", response.results.len(), count);
                response.results.into_iter().map(RawProfileRecord).collect()
            }
            Err(err) => {
                error!("Error fetching users: {}", err);
                Vec::new()
            }
        }
    }
}
