use gridiron_stats_data::{SeasonStatRecord, StatKind};

/// One displayable stat: a kind with a value the provider actually reported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatEntry {
    pub kind: StatKind,
    pub value: f64,
}

impl StatEntry {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Stats with a value, in [`StatKind::ALL`] order.
pub fn applicable_stats(stats: &SeasonStatRecord) -> Vec<StatEntry> {
    StatKind::ALL
        .iter()
        .filter_map(|kind| stats.get(*kind).map(|value| StatEntry { kind: *kind, value }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_projects_nothing() {
        assert!(applicable_stats(&SeasonStatRecord::default()).is_empty());
    }

    #[test]
    fn test_absent_values_are_skipped_and_order_is_fixed() {
        // Set out of order on purpose.
        let stats = SeasonStatRecord::default()
            .with(StatKind::Receptions, 97.0)
            .with(StatKind::GamesPlayed, 16.0)
            .with(StatKind::ReceivingYards, 823.0);

        let labels: Vec<&str> = applicable_stats(&stats).iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["Games Played", "Receiving Yards", "Receptions"]);
    }

    #[test]
    fn test_zero_is_a_value() {
        let stats = SeasonStatRecord::default().with(StatKind::RushingTouchdowns, 0.0);
        let entries = applicable_stats(&stats);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, 0.0);
        assert_eq!(entries[0].label(), "Rushing Touchdowns");
    }
}
