use serde::{Deserialize, Serialize};

use crate::infra::constants::{DEFAULT_RANDOM_USER_URL, DEFAULT_SEED_COUNT};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub log_path: String,
    #[serde(default = "default_console_filter")]
    pub console_filter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub allow_origins: Vec<String>,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomUserConfig {
    #[serde(default = "default_random_user_url")]
    pub base_url: String,
    /// Falls back to the HTTP client's own defaults when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for RandomUserConfig {
    fn default() -> Self {
        Self {
            base_url: default_random_user_url(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_seed_count")]
    pub initial_count: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            initial_count: DEFAULT_SEED_COUNT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub db: DatabaseConfig,
    pub logger: LoggerConfig,
    pub application: ApplicationConfig,
    #[serde(default)]
    pub random_user: RandomUserConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<AppConfig> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<AppConfig> {
        let config = toml::from_str(contents)?;
        Ok(config)
    }
}

fn default_console_filter() -> String {
    "info".to_string()
}

fn default_random_user_url() -> String {
    DEFAULT_RANDOM_USER_URL.to_string()
}

fn default_seed_count() -> u32 {
    DEFAULT_SEED_COUNT
}

fn default_true() -> bool {
    true
}
