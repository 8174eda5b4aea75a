//! Player search module.
//!
//! Resolves free-text player searches into merged player/stat records.
//!
//! # Architecture
//!
//! ```text
//! raw text → normalize() → Query
//!                            ↓
//! SearchSession ──→ SearchResolver ──→ ResultCache (hit)
//!      ↓                     ↓
//! SearchView         StatsDataProvider (miss: search, then per-player stats)
//! ```
//!
//! - **Normalizer** (`normalizer.rs`) - Trims and lowercases input into a cache key
//! - **Cache** (`cache.rs`) - Session-lifetime map from normalized query to results
//! - **Model** (`model.rs`) - `MergedResult` and the merge helper
//! - **Projection** (`projection.rs`) - Ordered, non-empty stat lines for display
//! - **Resolver** (`resolver.rs`) - The resolution pipeline
//! - **Session** (`session.rs`) - View state and request sequencing

mod cache;
mod model;
mod normalizer;
mod projection;
mod resolver;
mod session;

pub use cache::ResultCache;
pub use model::{merge_player_stats, MergedResult, ResultSet};
pub use normalizer::{normalize, NormalizedQuery, Query};
pub use projection::{applicable_stats, StatEntry};
pub use resolver::{Resolution, ResolutionSource, SearchResolver};
pub use session::{SearchSession, SearchView};
