use serde::{Deserialize, Serialize};

use super::player::PlayerRecord;
use super::types::Season;

/// The fixed set of season statistics the application knows about.
///
/// Declaration order is display order; [`StatKind::ALL`] mirrors it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatKind {
    GamesPlayed,
    PassingYards,
    PassingYardsPerGame,
    PassingTouchdowns,
    Interceptions,
    RushingYards,
    RushingTouchdowns,
    RushingAttempts,
    ReceivingYards,
    ReceivingTouchdowns,
    Receptions,
}

impl StatKind {
    /// Every stat kind, in display order.
    pub const ALL: [StatKind; 11] = [
        StatKind::GamesPlayed,
        StatKind::PassingYards,
        StatKind::PassingYardsPerGame,
        StatKind::PassingTouchdowns,
        StatKind::Interceptions,
        StatKind::RushingYards,
        StatKind::RushingTouchdowns,
        StatKind::RushingAttempts,
        StatKind::ReceivingYards,
        StatKind::ReceivingTouchdowns,
        StatKind::Receptions,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            StatKind::GamesPlayed => "Games Played",
            StatKind::PassingYards => "Passing Yards",
            StatKind::PassingYardsPerGame => "Passing Yards Per Game",
            StatKind::PassingTouchdowns => "Passing Touchdowns",
            StatKind::Interceptions => "Interceptions",
            StatKind::RushingYards => "Rushing Yards",
            StatKind::RushingTouchdowns => "Rushing Touchdowns",
            StatKind::RushingAttempts => "Rushing Attempts",
            StatKind::ReceivingYards => "Receiving Yards",
            StatKind::ReceivingTouchdowns => "Receiving Touchdowns",
            StatKind::Receptions => "Receptions",
        }
    }
}

/// Season statistics for one player.
///
/// Field names match the provider's wire names. A missing or `null` field
/// deserializes to `None`; `Default` is the empty stat set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonStatRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub games_played: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing_yards: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing_yards_per_game: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing_touchdowns: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing_interceptions: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rushing_yards: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rushing_touchdowns: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rushing_attempts: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiving_yards: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiving_touchdowns: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receptions: Option<f64>,
}

impl SeasonStatRecord {
    /// Value for a single stat kind, if the provider reported one.
    pub fn get(&self, kind: StatKind) -> Option<f64> {
        match kind {
            StatKind::GamesPlayed => self.games_played,
            StatKind::PassingYards => self.passing_yards,
            StatKind::PassingYardsPerGame => self.passing_yards_per_game,
            StatKind::PassingTouchdowns => self.passing_touchdowns,
            StatKind::Interceptions => self.passing_interceptions,
            StatKind::RushingYards => self.rushing_yards,
            StatKind::RushingTouchdowns => self.rushing_touchdowns,
            StatKind::RushingAttempts => self.rushing_attempts,
            StatKind::ReceivingYards => self.receiving_yards,
            StatKind::ReceivingTouchdowns => self.receiving_touchdowns,
            StatKind::Receptions => self.receptions,
        }
    }

    /// Set the value for a single stat kind.
    pub fn set(&mut self, kind: StatKind, value: Option<f64>) {
        let slot = match kind {
            StatKind::GamesPlayed => &mut self.games_played,
            StatKind::PassingYards => &mut self.passing_yards,
            StatKind::PassingYardsPerGame => &mut self.passing_yards_per_game,
            StatKind::PassingTouchdowns => &mut self.passing_touchdowns,
            StatKind::Interceptions => &mut self.passing_interceptions,
            StatKind::RushingYards => &mut self.rushing_yards,
            StatKind::RushingTouchdowns => &mut self.rushing_touchdowns,
            StatKind::RushingAttempts => &mut self.rushing_attempts,
            StatKind::ReceivingYards => &mut self.receiving_yards,
            StatKind::ReceivingTouchdowns => &mut self.receiving_touchdowns,
            StatKind::Receptions => &mut self.receptions,
        };
        *slot = value;
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, kind: StatKind, value: f64) -> Self {
        self.set(kind, Some(value));
        self
    }

    /// True when no stat carries a value.
    pub fn is_empty(&self) -> bool {
        StatKind::ALL.iter().all(|kind| self.get(*kind).is_none())
    }
}

/// One row of a season-stats response: a player and their numbers for a season.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeasonStatLine {
    pub player: PlayerRecord,

    pub season: Season,

    #[serde(default)]
    pub postseason: bool,

    #[serde(flatten)]
    pub stats: SeasonStatRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerId;

    #[test]
    fn test_all_is_declaration_order() {
        let labels: Vec<&str> = StatKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels.first(), Some(&"Games Played"));
        assert_eq!(labels.last(), Some(&"Receptions"));
        assert_eq!(labels.len(), 11);
    }

    #[test]
    fn test_get_and_set_cover_every_kind() {
        let mut record = SeasonStatRecord::default();
        assert!(record.is_empty());

        for (i, kind) in StatKind::ALL.iter().enumerate() {
            record.set(*kind, Some(i as f64));
        }
        for (i, kind) in StatKind::ALL.iter().enumerate() {
            assert_eq!(record.get(*kind), Some(i as f64));
        }
        assert!(!record.is_empty());
    }

    #[test]
    fn test_interceptions_maps_to_passing_interceptions() {
        let record = SeasonStatRecord::default().with(StatKind::Interceptions, 11.0);
        assert_eq!(record.passing_interceptions, Some(11.0));
    }

    #[test]
    fn test_stat_line_parsing() {
        let json = r#"{
            "player": {"id": 19, "first_name": "Patrick", "last_name": "Mahomes", "position": "Quarterback"},
            "season": 2024,
            "postseason": false,
            "games_played": 16,
            "passing_yards": 3928,
            "passing_yards_per_game": 245.5,
            "passing_touchdowns": 26,
            "passing_interceptions": 11,
            "rushing_yards": 307,
            "rushing_touchdowns": 2,
            "rushing_attempts": 58,
            "receiving_yards": null,
            "receiving_touchdowns": null,
            "receptions": null,
            "qbr": 62.3
        }"#;

        let line: SeasonStatLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.player.id, PlayerId(19));
        assert_eq!(line.season, 2024);
        assert_eq!(line.stats.games_played, Some(16.0));
        assert_eq!(line.stats.passing_yards_per_game, Some(245.5));
        assert_eq!(line.stats.get(StatKind::Interceptions), Some(11.0));
        assert_eq!(line.stats.receptions, None);
    }
}
