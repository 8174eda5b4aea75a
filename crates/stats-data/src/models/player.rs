use std::fmt;

use serde::{Deserialize, Serialize};

/// Provider-assigned player identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Team the player is currently rostered on
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
}

/// Player identity and biographical data as returned by a provider.
///
/// Everything but the id and name is optional: providers routinely send
/// `null` for retired players, rookies or practice-squad entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,

    pub first_name: String,

    pub last_name: String,

    /// Full position name (e.g., "Quarterback")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Short position code (e.g., "QB")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_abbreviation: Option<String>,

    /// Height as sent by the provider (e.g., "6' 2\"")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,

    /// Weight as sent by the provider (e.g., "225 lbs")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,

    /// Experience label (e.g., "8th Season")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamRef>,
}

impl PlayerRecord {
    /// Create a player record with only the required fields set.
    pub fn new(id: u64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: PlayerId(id),
            first_name: first_name.into(),
            last_name: last_name.into(),
            position: None,
            position_abbreviation: None,
            height: None,
            weight: None,
            jersey_number: None,
            college: None,
            experience: None,
            age: None,
            team: None,
        }
    }

    /// Set the position.
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_parsing_with_nulls() {
        let json = r#"{
            "id": 33,
            "first_name": "Lamar",
            "last_name": "Jackson",
            "position": "Quarterback",
            "position_abbreviation": "QB",
            "height": "6' 2\"",
            "weight": "205 lbs",
            "jersey_number": "8",
            "college": "Louisville",
            "experience": "7th Season",
            "age": null,
            "team": {"id": 3, "full_name": "Baltimore Ravens", "abbreviation": "BAL", "name": "Ravens"}
        }"#;

        let player: PlayerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(player.id, PlayerId(33));
        assert_eq!(player.full_name(), "Lamar Jackson");
        assert_eq!(player.position.as_deref(), Some("Quarterback"));
        assert_eq!(player.height.as_deref(), Some("6' 2\""));
        assert_eq!(player.age, None);
        assert_eq!(
            player.team.and_then(|t| t.abbreviation).as_deref(),
            Some("BAL")
        );
    }

    #[test]
    fn test_player_parsing_minimal() {
        let json = r#"{"id": 7, "first_name": "A", "last_name": "B"}"#;
        let player: PlayerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(player, PlayerRecord::new(7, "A", "B"));
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId(1234).to_string(), "1234");
    }
}
