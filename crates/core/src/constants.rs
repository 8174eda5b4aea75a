use gridiron_stats_data::Season;

/// Season every stat request is made for
pub const CURRENT_SEASON: Season = 2024;
