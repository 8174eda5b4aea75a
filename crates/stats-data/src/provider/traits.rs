//! Stats data provider trait definitions.

use async_trait::async_trait;

use crate::errors::StatsDataError;
use crate::models::{PlayerId, PlayerRecord, Season, SeasonStatLine};

/// Trait for NFL stats providers.
///
/// Implement this trait to add support for a new data source. The search
/// pipeline only ever talks to providers through it.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use gridiron_stats_data::provider::StatsDataProvider;
///
/// struct MyProvider {
///     api_key: String,
/// }
///
/// #[async_trait]
/// impl StatsDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     // ... implement search_players and get_season_stats
/// }
/// ```
#[async_trait]
pub trait StatsDataProvider: Send + Sync {
    /// Unique identifier for this provider, used in errors and logs.
    fn id(&self) -> &'static str;

    /// Search players by name.
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text name fragment (e.g., "mahomes")
    ///
    /// # Returns
    ///
    /// Matching players in the provider's order. An empty vector means no
    /// match; it is not an error.
    async fn search_players(&self, query: &str) -> Result<Vec<PlayerRecord>, StatsDataError>;

    /// Fetch season statistics.
    ///
    /// # Arguments
    ///
    /// * `player_ids` - Restrict to these players; empty requests the
    ///   unfiltered feed for the season
    /// * `season` - Season year
    ///
    /// # Returns
    ///
    /// One line per player and season type the provider has data for. A
    /// player without stats is simply absent.
    async fn get_season_stats(
        &self,
        player_ids: &[PlayerId],
        season: Season,
    ) -> Result<Vec<SeasonStatLine>, StatsDataError>;
}
