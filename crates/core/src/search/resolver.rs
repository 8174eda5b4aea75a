//! Search resolution pipeline.
//!
//! The resolver owns the result cache and the initial player list, and turns
//! a [`Query`] into a [`Resolution`]:
//!
//! 1. Empty query: the initial list, no selection. Cache and network untouched.
//! 2. Cache hit: the cached results as stored.
//! 3. Miss: search players, then fetch each player's season stats
//!    concurrently. Any failed fetch fails the whole resolution.
//! 4. Non-empty results are cached. Empty results are not.
//! 5. The selection is the sole player's id when exactly one result came back.

use std::sync::{Arc, RwLock};

use futures::future::try_join_all;
use gridiron_stats_data::{PlayerId, PlayerRecord, Season, StatsDataProvider};
use log::{debug, info, warn};

use super::cache::ResultCache;
use super::model::{merge_player_stats, MergedResult, ResultSet};
use super::normalizer::{NormalizedQuery, Query};
use crate::constants::CURRENT_SEASON;
use crate::errors::{Result, SearchError};

/// Where the results of a resolution came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionSource {
    /// The initial player list (empty query or initial load).
    Initial,
    /// A previously stored cache entry.
    Cache,
    /// Fresh provider calls.
    Network,
}

/// The outcome of one resolution.
#[derive(Clone, Debug)]
pub struct Resolution {
    pub query: Query,
    pub results: ResultSet,
    pub selected_player_id: Option<PlayerId>,
    pub source: ResolutionSource,
}

impl Resolution {
    /// Build a resolution whose selection is derived from `results`.
    fn derived(query: Query, results: ResultSet, source: ResolutionSource) -> Self {
        let selected_player_id = sole_player_id(&results);
        Self {
            query,
            results,
            selected_player_id,
            source,
        }
    }

    fn initial(query: Query, results: ResultSet) -> Self {
        Self {
            query,
            results,
            selected_player_id: None,
            source: ResolutionSource::Initial,
        }
    }
}

/// Id of the only result, if there is exactly one.
fn sole_player_id(results: &[MergedResult]) -> Option<PlayerId> {
    match results {
        [only] => Some(only.player.id),
        _ => None,
    }
}

/// Resolves player searches against a stats provider, with caching.
pub struct SearchResolver {
    provider: Arc<dyn StatsDataProvider>,
    cache: ResultCache,
    initial: RwLock<ResultSet>,
    season: Season,
}

impl SearchResolver {
    /// Creates a resolver for the current season with an empty initial list.
    pub fn new(provider: Arc<dyn StatsDataProvider>) -> Self {
        Self {
            provider,
            cache: ResultCache::new(),
            initial: RwLock::new(ResultSet::from(Vec::new())),
            season: CURRENT_SEASON,
        }
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    pub fn season(&self) -> Season {
        self.season
    }

    /// The list shown for an empty query.
    pub fn initial_results(&self) -> ResultSet {
        self.initial
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_initial(&self, results: ResultSet) {
        *self
            .initial
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = results;
    }

    /// Replace the initial list with bare players (no stats requested).
    pub fn set_initial_players(&self, players: Vec<PlayerRecord>) {
        let results: ResultSet = players.into_iter().map(MergedResult::without_stats).collect();
        self.set_initial(results);
    }

    /// Load the unfiltered season feed as the initial list.
    ///
    /// Each feed line already carries its player, so the initial list comes
    /// with stats attached.
    pub async fn load_initial(&self) -> Result<Resolution> {
        info!("Loading initial players for season {}", self.season);

        let lines = self
            .provider
            .get_season_stats(&[], self.season)
            .await
            .map_err(|e| {
                warn!("Initial load from '{}' failed: {}", self.provider.id(), e);
                SearchError::InitialLoad(e)
            })?;

        let results: ResultSet = lines.into_iter().map(MergedResult::from).collect();
        info!("Loaded {} initial player(s)", results.len());
        self.set_initial(results.clone());

        Ok(Resolution::initial(Query::Empty, results))
    }

    /// The empty-query resolution: initial list, selection cleared.
    pub fn reset(&self) -> Resolution {
        Resolution::initial(Query::Empty, self.initial_results())
    }

    /// Resolve a normalized query.
    pub async fn resolve(&self, query: &Query) -> Result<Resolution> {
        let term = match query {
            Query::Empty => return Ok(self.reset()),
            Query::Term(term) => term,
        };

        if let Some(results) = self.cache.get(term) {
            debug!(
                "Serving '{}' from cache ({} result(s), cached at {:?})",
                term,
                results.len(),
                self.cache.cached_at(term)
            );
            return Ok(Resolution::derived(
                query.clone(),
                results,
                ResolutionSource::Cache,
            ));
        }

        let results = self.fetch(term).await?;

        if results.is_empty() {
            // Not cached, so a later retry queries the provider again.
            debug!("No players found for '{}'", term);
        } else {
            self.cache.put(term.clone(), results.clone());
        }

        Ok(Resolution::derived(
            query.clone(),
            results,
            ResolutionSource::Network,
        ))
    }

    /// Search, then fetch stats for every hit. All-or-nothing.
    async fn fetch(&self, term: &NormalizedQuery) -> Result<ResultSet> {
        let provider_id = self.provider.id();

        let players = self
            .provider
            .search_players(term.as_str())
            .await
            .map_err(|e| {
                warn!("Player search '{}' on '{}' failed: {}", term, provider_id, e);
                SearchError::Search(e)
            })?;

        if players.is_empty() {
            return Ok(ResultSet::from(Vec::new()));
        }

        debug!(
            "Search '{}' matched {} player(s), fetching {} stats",
            term,
            players.len(),
            self.season
        );

        let stat_batches = try_join_all(players.iter().map(|player| {
            let ids = [player.id];
            async move { self.provider.get_season_stats(&ids, self.season).await }
        }))
        .await
        .map_err(|e| {
            warn!(
                "Stat fetch for '{}' on '{}' failed, discarding resolution: {}",
                term, provider_id, e
            );
            SearchError::Search(e)
        })?;

        Ok(merge_player_stats(players, stat_batches).into())
    }
}
