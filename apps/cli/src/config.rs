use std::time::Duration;

use anyhow::{anyhow, Context};
use gridiron_stats_data::provider::balldontlie::DEFAULT_BASE_URL;
use gridiron_stats_data::BalldontlieConfig;

pub struct Config {
    pub api_key: String,
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub per_page: Option<u32>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_key = var("GRIDIRON_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| anyhow!("GRIDIRON_API_KEY is not set"))?;
        let api_base_url =
            var("GRIDIRON_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_ms: u64 = var("GRIDIRON_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|| "30000".into())
            .parse()
            .unwrap_or(30000);
        let per_page = var("GRIDIRON_PER_PAGE")
            .map(|value| value.parse::<u32>())
            .transpose()
            .context("Invalid GRIDIRON_PER_PAGE")?;
        Ok(Self {
            api_key,
            api_base_url,
            request_timeout: Duration::from_millis(timeout_ms),
            per_page,
        })
    }

    pub fn provider_config(&self) -> BalldontlieConfig {
        BalldontlieConfig {
            api_key: self.api_key.clone(),
            base_url: self.api_base_url.clone(),
            timeout: self.request_timeout,
            per_page: self.per_page,
        }
    }
}
