use std::sync::Arc;

use gridiron_stats_data::{PlayerRecord, SeasonStatLine, SeasonStatRecord};

use super::projection::{applicable_stats, StatEntry};

/// A player combined with their season statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct MergedResult {
    pub player: PlayerRecord,

    /// Empty when the provider had no stats for the player.
    pub stats: SeasonStatRecord,
}

impl MergedResult {
    pub fn new(player: PlayerRecord, stats: SeasonStatRecord) -> Self {
        Self { player, stats }
    }

    /// Wrap a player with an empty stat set.
    pub fn without_stats(player: PlayerRecord) -> Self {
        Self::new(player, SeasonStatRecord::default())
    }

    /// Display-ready stat lines for this result.
    pub fn applicable_stats(&self) -> Vec<StatEntry> {
        applicable_stats(&self.stats)
    }
}

impl From<SeasonStatLine> for MergedResult {
    fn from(line: SeasonStatLine) -> Self {
        Self::new(line.player, line.stats)
    }
}

/// Immutable, cheaply cloneable result sequence.
pub type ResultSet = Arc<[MergedResult]>;

/// Pair each player with the first stat line fetched for it.
///
/// `stat_batches[i]` must be the response for `players[i]`; pairing is by
/// position, never by the player id inside the stat line.
pub fn merge_player_stats(
    players: Vec<PlayerRecord>,
    stat_batches: Vec<Vec<SeasonStatLine>>,
) -> Vec<MergedResult> {
    players
        .into_iter()
        .zip(stat_batches)
        .map(|(player, lines)| {
            let stats = lines
                .into_iter()
                .next()
                .map(|line| line.stats)
                .unwrap_or_default();
            MergedResult::new(player, stats)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridiron_stats_data::StatKind;

    fn line(player: &PlayerRecord, passing_yards: f64) -> SeasonStatLine {
        SeasonStatLine {
            player: player.clone(),
            season: 2024,
            postseason: false,
            stats: SeasonStatRecord::default().with(StatKind::PassingYards, passing_yards),
        }
    }

    #[test]
    fn test_merge_keeps_player_order() {
        let a = PlayerRecord::new(1, "Josh", "Allen");
        let b = PlayerRecord::new(2, "Josh", "Jacobs");
        let merged = merge_player_stats(
            vec![a.clone(), b.clone()],
            vec![vec![line(&a, 3731.0)], vec![line(&b, 0.0)]],
        );

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].player, a);
        assert_eq!(merged[0].stats.passing_yards, Some(3731.0));
        assert_eq!(merged[1].player, b);
    }

    #[test]
    fn test_merge_defaults_to_empty_stats() {
        let a = PlayerRecord::new(1, "Josh", "Allen");
        let merged = merge_player_stats(vec![a], vec![vec![]]);
        assert!(merged[0].stats.is_empty());
    }

    #[test]
    fn test_merge_takes_first_stat_line() {
        let a = PlayerRecord::new(1, "Josh", "Allen");
        let merged = merge_player_stats(
            vec![a.clone()],
            vec![vec![line(&a, 3731.0), line(&a, 600.0)]],
        );
        assert_eq!(merged[0].stats.passing_yards, Some(3731.0));
    }

    #[test]
    fn test_merge_pairs_by_position_not_by_embedded_id() {
        let a = PlayerRecord::new(1, "Josh", "Allen");
        let other = PlayerRecord::new(99, "Someone", "Else");
        let merged = merge_player_stats(vec![a.clone()], vec![vec![line(&other, 10.0)]]);
        assert_eq!(merged[0].player, a);
        assert_eq!(merged[0].stats.passing_yards, Some(10.0));
    }
}
