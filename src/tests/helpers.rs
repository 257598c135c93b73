#![cfg(test)]

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::application::dto::profile::RawProfileRecord;
use crate::application::interface::fetcher::ProfileFetcher;

/// Returns canned records and remembers every requested count.
#[derive(Default)]
pub struct StubFetcher {
    records: Vec<RawProfileRecord>,
    calls: Mutex<Vec<u32>>,
}

impl StubFetcher {
    pub fn with_records(records: Vec<RawProfileRecord>) -> Self {
        Self {
            records,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<u32> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileFetcher for StubFetcher {
    async fn fetch(&self, count: u32) -> Vec<RawProfileRecord> {
        self.calls.lock().unwrap().push(count);
        self.records.iter().take(count as usize).cloned().collect()
    }
}

/// Answers after `delay`, like a slow upstream API.
pub struct SlowFetcher {
    delay: Duration,
    records: Vec<RawProfileRecord>,
}

impl SlowFetcher {
    pub fn new(delay: Duration, records: Vec<RawProfileRecord>) -> Self {
        Self { delay, records }
    }
}

#[async_trait]
impl ProfileFetcher for SlowFetcher {
    async fn fetch(&self, count: u32) -> Vec<RawProfileRecord> {
        tokio::time::sleep(self.delay).await;
        self.records.iter().take(count as usize).cloned().collect()
    }
}

pub async fn clear_profiles(pool: &PgPool) {
    sqlx::query("DELETE FROM profiles")
        .execute(pool)
        .await
        .expect("clear profiles");
}

pub async fn count_profiles_like(pool: &PgPool, email_pattern: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM profiles WHERE email LIKE $1")
        .bind(email_pattern)
        .fetch_one(pool)
        .await
        .expect("count profiles")
}

pub async fn insert_profile(pool: &PgPool, first_name: &str, email: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
            INSERT INTO profiles (gender, first_name, last_name, phone, email, location, photo)
            VALUES ('male', $1, 'Doe', '123', $2, 'US, NY', 'john.jpg')
            RETURNING id
        "#,
    )
    .bind(first_name)
    .bind(email)
    .fetch_one(pool)
    .await
    .expect("insert profile")
}

pub async fn delete_profile(pool: &PgPool, profile_id: i64) {
    sqlx::query("DELETE FROM profiles WHERE id = $1")
        .bind(profile_id)
        .execute(pool)
        .await
        .expect("delete profile");
}
