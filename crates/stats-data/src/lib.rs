//! Gridiron Stats Data Crate
//!
//! This crate provides provider-agnostic access to NFL player and
//! season-statistics data for the Gridiron application.
//!
//! # Overview
//!
//! - Player lookup by free-text name search
//! - Per-player (or unfiltered) season statistics for a given season
//! - A provider trait so the search pipeline never talks HTTP directly
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +----------------------+
//! |  Search Pipeline | --> |  StatsDataProvider   |  (trait)
//! +------------------+     +----------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   balldontlie    |  (HTTP provider)
//!                          +------------------+
//!                                  |
//!                                  v
//!                  +-------------------------------+
//!                  | PlayerRecord / SeasonStatLine |
//!                  +-------------------------------+
//! ```
//!
//! # Core Types
//!
//! - [`PlayerRecord`] - Player identity and biographical fields
//! - [`SeasonStatRecord`] - Optional values for the fixed set of [`StatKind`]s
//! - [`SeasonStatLine`] - One player's stat record for one season
//! - [`StatsDataError`] - Errors surfaced by providers

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::StatsDataError;
pub use models::{
    PlayerId, PlayerRecord, Season, SeasonStatLine, SeasonStatRecord, StatKind, TeamRef,
};

pub use provider::balldontlie::{BalldontlieConfig, BalldontlieProvider};
pub use provider::StatsDataProvider;
