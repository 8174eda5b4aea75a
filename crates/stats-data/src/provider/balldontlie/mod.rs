//! balldontlie NFL provider implementation.
//!
//! This module provides NFL data from the balldontlie API:
//! - Player name search via /nfl/v1/players
//! - Season statistics via /nfl/v1/season_stats
//!
//! Every request carries the API key in the `Authorization` header.
//! API documentation: https://nfl.balldontlie.io

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::errors::StatsDataError;
use crate::models::{PlayerId, PlayerRecord, Season, SeasonStatLine};
use crate::provider::StatsDataProvider;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.balldontlie.io";

const PROVIDER_ID: &str = "BALLDONTLIE";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// API Response Structures
// ============================================================================

/// Every list endpoint wraps its rows in `data`
#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    data: Vec<T>,
    // Note: meta (cursor pagination) exists but only the first page is used
}

/// Error body; the API uses either key depending on the failure
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
    message: Option<String>,
}

// ============================================================================
// BalldontlieProvider
// ============================================================================

/// Connection settings for [`BalldontlieProvider`].
#[derive(Clone, Debug)]
pub struct BalldontlieConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    /// Page size forwarded to list endpoints; provider default when unset.
    pub per_page: Option<u32>,
}

impl BalldontlieConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
            per_page: None,
        }
    }
}

/// balldontlie NFL provider.
pub struct BalldontlieProvider {
    client: Client,
    config: BalldontlieConfig,
}

impl BalldontlieProvider {
    /// Create a new provider from its configuration.
    pub fn new(config: BalldontlieConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Make a GET request and decode the `data` array of the response.
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Vec<T>, StatsDataError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);

        debug!("balldontlie request: {} with {} params", endpoint, params.len());

        let response = self
            .client
            .get(&url)
            .header("Authorization", &self.config.api_key)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    StatsDataError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    StatsDataError::Network(e)
                }
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(StatsDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(StatsDataError::Unauthorized {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StatsDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: error_message(status, &body),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| StatsDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })?;

        parse_list(&text)
    }

    fn with_page_size(&self, mut params: Vec<(String, String)>) -> Vec<(String, String)> {
        if let Some(per_page) = self.config.per_page {
            params.push(("per_page".to_string(), per_page.to_string()));
        }
        params
    }
}

#[async_trait]
impl StatsDataProvider for BalldontlieProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn search_players(&self, query: &str) -> Result<Vec<PlayerRecord>, StatsDataError> {
        debug!("Searching balldontlie players for '{}'", query);
        let params = self.with_page_size(search_params(query));
        self.fetch("/nfl/v1/players", &params).await
    }

    async fn get_season_stats(
        &self,
        player_ids: &[PlayerId],
        season: Season,
    ) -> Result<Vec<SeasonStatLine>, StatsDataError> {
        debug!(
            "Fetching {} season stats from balldontlie for {} player(s)",
            season,
            player_ids.len()
        );
        let params = self.with_page_size(season_stats_params(player_ids, season));
        self.fetch("/nfl/v1/season_stats", &params).await
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn search_params(query: &str) -> Vec<(String, String)> {
    vec![("search".to_string(), query.to_string())]
}

fn season_stats_params(player_ids: &[PlayerId], season: Season) -> Vec<(String, String)> {
    let mut params = vec![("season".to_string(), season.to_string())];
    params.extend(
        player_ids
            .iter()
            .map(|id| ("player_ids[]".to_string(), id.to_string())),
    );
    params
}

fn parse_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, StatsDataError> {
    serde_json::from_str::<ListResponse<T>>(body)
        .map(|list| list.data)
        .map_err(|e| StatsDataError::InvalidResponse {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })
}

/// Best-effort message for a non-success response.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(body) {
        if let Some(msg) = error_resp.error.or(error_resp.message) {
            return msg;
        }
    }
    format!("HTTP {} - {}", status, body)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(per_page: Option<u32>) -> BalldontlieProvider {
        let mut config = BalldontlieConfig::new("test_key");
        config.per_page = per_page;
        BalldontlieProvider::new(config)
    }

    #[test]
    fn test_provider_id() {
        assert_eq!(provider(None).id(), "BALLDONTLIE");
    }

    #[test]
    fn test_config_defaults() {
        let config = BalldontlieConfig::new("k");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.per_page, None);
    }

    #[test]
    fn test_season_stats_params() {
        let params = season_stats_params(&[PlayerId(19), PlayerId(33)], 2024);
        assert_eq!(
            params,
            vec![
                ("season".to_string(), "2024".to_string()),
                ("player_ids[]".to_string(), "19".to_string()),
                ("player_ids[]".to_string(), "33".to_string()),
            ]
        );
    }

    #[test]
    fn test_unfiltered_season_stats_params() {
        let params = season_stats_params(&[], 2024);
        assert_eq!(params, vec![("season".to_string(), "2024".to_string())]);
    }

    #[test]
    fn test_page_size_is_appended_only_when_configured() {
        let params = provider(Some(50)).with_page_size(search_params("mahomes"));
        assert_eq!(
            params,
            vec![
                ("search".to_string(), "mahomes".to_string()),
                ("per_page".to_string(), "50".to_string()),
            ]
        );

        let params = provider(None).with_page_size(search_params("mahomes"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_players_response_parsing() {
        let json = r#"{
            "data": [
                {"id": 19, "first_name": "Patrick", "last_name": "Mahomes", "position": "Quarterback"},
                {"id": 20, "first_name": "Patrick", "last_name": "Ricard", "position": "Fullback"}
            ],
            "meta": {"next_cursor": 20, "per_page": 25}
        }"#;

        let players: Vec<PlayerRecord> = parse_list(json).unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].id, PlayerId(19));
        assert_eq!(players[1].last_name, "Ricard");
    }

    #[test]
    fn test_empty_response_parsing() {
        let players: Vec<PlayerRecord> = parse_list(r#"{"data": [], "meta": {}}"#).unwrap();
        assert!(players.is_empty());
    }

    #[test]
    fn test_malformed_response_is_invalid_response() {
        let result: Result<Vec<PlayerRecord>, _> = parse_list(r#"{"rows": []}"#);
        assert!(matches!(
            result,
            Err(StatsDataError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn test_error_message_prefers_body_fields() {
        let status = reqwest::StatusCode::BAD_REQUEST;
        assert_eq!(
            error_message(status, r#"{"error": "season is required"}"#),
            "season is required"
        );
        assert_eq!(
            error_message(status, r#"{"message": "bad cursor"}"#),
            "bad cursor"
        );
        assert_eq!(
            error_message(status, "oops"),
            "HTTP 400 Bad Request - oops"
        );
    }
}
