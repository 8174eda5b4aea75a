//! Stats data models
//!
//! - `types` - Type aliases for common identifiers (Season)
//! - `player` - Player identity (PlayerId, PlayerRecord)
//! - `stats` - Season statistics (StatKind, SeasonStatRecord, SeasonStatLine)

mod player;
mod stats;
mod types;

pub use player::{PlayerId, PlayerRecord, TeamRef};
pub use stats::{SeasonStatLine, SeasonStatRecord, StatKind};
pub use types::Season;
