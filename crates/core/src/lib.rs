//! Gridiron Core - search-and-cache resolution of NFL player statistics.
//!
//! This crate turns free-text player searches into merged player/stat
//! records, memoizes them per normalized query and keeps an immutable view
//! snapshot for the front end. It is transport-agnostic and talks to data
//! sources only through the `StatsDataProvider` trait of the
//! `gridiron-stats-data` crate.

pub mod constants;
pub mod errors;
pub mod search;

// Re-export error types
pub use errors::Result;
pub use errors::SearchError;

pub use search::{
    applicable_stats, normalize, MergedResult, NormalizedQuery, Query, Resolution,
    ResolutionSource, ResultCache, ResultSet, SearchResolver, SearchSession, SearchView,
    StatEntry,
};
