//! Stats data provider abstractions and implementations.
//!
//! This module contains:
//! - The `StatsDataProvider` trait consumed by the search pipeline
//! - The balldontlie HTTP provider

mod traits;

pub mod balldontlie;

pub use traits::StatsDataProvider;
