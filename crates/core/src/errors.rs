//! Core error types for the Gridiron application.
//!
//! Provider failures are wrapped into one of two user-facing kinds depending
//! on which operation they interrupted. The `Display` text of each kind is
//! the message shown to the user; the provider error stays reachable through
//! `source()` for logging.

use gridiron_stats_data::StatsDataError;
use thiserror::Error;

/// Type alias for Result using our error type.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors surfaced by the search pipeline.
///
/// Both kinds are terminal for the operation that raised them: no retry is
/// attempted and no partial results are kept.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The unfiltered season feed shown before any search failed to load.
    #[error("Failed to fetch initial players")]
    InitialLoad(#[source] StatsDataError),

    /// The player search, or one of its per-player stat fetches, failed.
    #[error("Failed to fetch player by name")]
    Search(#[source] StatsDataError),
}

impl SearchError {
    /// Message suitable for display.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// The underlying provider error.
    pub fn provider_error(&self) -> &StatsDataError {
        match self {
            Self::InitialLoad(e) | Self::Search(e) => e,
        }
    }
}
