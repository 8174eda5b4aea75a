//! Session-lifetime result cache.
//!
//! Entries are never evicted or expired. `put` on an existing key silently
//! replaces the entry, so concurrent resolutions of the same query settle as
//! last-writer-wins.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use log::{debug, warn};

use super::model::ResultSet;
use super::normalizer::NormalizedQuery;

/// Cache entry for a resolved query.
struct CachedResults {
    results: ResultSet,
    /// Diagnostic only; never used for invalidation.
    cached_at: DateTime<Utc>,
}

/// Map from normalized query to its resolved results.
#[derive(Default)]
pub struct ResultCache {
    entries: RwLock<HashMap<NormalizedQuery, CachedResults>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock for reading, recovering from poison.
    ///
    /// A writer can only panic between two whole-entry operations, so the
    /// map is never left half-updated.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<NormalizedQuery, CachedResults>> {
        self.entries.read().unwrap_or_else(|poisoned| {
            warn!("Result cache lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<NormalizedQuery, CachedResults>> {
        self.entries.write().unwrap_or_else(|poisoned| {
            warn!("Result cache lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Cached results for `key`, if any.
    pub fn get(&self, key: &NormalizedQuery) -> Option<ResultSet> {
        self.read().get(key).map(|entry| entry.results.clone())
    }

    /// Store `results` under `key`, replacing any previous entry.
    pub fn put(&self, key: NormalizedQuery, results: ResultSet) {
        debug!("Caching {} result(s) for '{}'", results.len(), key);
        self.write().insert(
            key,
            CachedResults {
                results,
                cached_at: Utc::now(),
            },
        );
    }

    /// When the entry for `key` was stored.
    pub fn cached_at(&self, key: &NormalizedQuery) -> Option<DateTime<Utc>> {
        self.read().get(key).map(|entry| entry.cached_at)
    }

    pub fn contains(&self, key: &NormalizedQuery) -> bool {
        self.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::MergedResult;
    use gridiron_stats_data::PlayerRecord;

    fn key(raw: &str) -> NormalizedQuery {
        NormalizedQuery::new(raw).unwrap()
    }

    fn results(ids: &[u64]) -> ResultSet {
        ids.iter()
            .map(|id| MergedResult::without_stats(PlayerRecord::new(*id, "First", "Last")))
            .collect()
    }

    #[test]
    fn test_get_missing_key() {
        let cache = ResultCache::new();
        assert!(cache.get(&key("kelce")).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_put_then_get() {
        let cache = ResultCache::new();
        cache.put(key("kelce"), results(&[1, 2]));

        let cached = cache.get(&key("kelce")).unwrap();
        assert_eq!(cached.len(), 2);
        assert!(cache.contains(&key("kelce")));
        assert!(cache.cached_at(&key("kelce")).is_some());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_put_overwrites() {
        let cache = ResultCache::new();
        cache.put(key("kelce"), results(&[1, 2]));
        cache.put(key("kelce"), results(&[3]));

        let cached = cache.get(&key("kelce")).unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].player.id.0, 3);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_returns_shared_snapshot() {
        let cache = ResultCache::new();
        let stored = results(&[1]);
        cache.put(key("kelce"), stored.clone());

        let cached = cache.get(&key("kelce")).unwrap();
        assert!(std::sync::Arc::ptr_eq(&stored, &cached));
    }
}
