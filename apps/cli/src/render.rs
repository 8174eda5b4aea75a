use std::fmt;

use gridiron_core::{MergedResult, SearchView};
use gridiron_stats_data::Season;

/// Render the whole view as plain text.
pub fn render_view(view: &SearchView, season: Season) -> String {
    if view.loading {
        return "Loading...\n".to_string();
    }

    if let Some(error) = &view.error {
        return format!("Error: {}\n", error);
    }

    if view.results.is_empty() {
        return "No players found for the search term.\n".to_string();
    }

    view.results
        .iter()
        .map(|result| ResultBlock { result, season }.to_string())
        .collect()
}

/// One player's block: identity, bio fields, then the non-null stats.
struct ResultBlock<'a> {
    result: &'a MergedResult,
    season: Season,
}

impl fmt::Display for ResultBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player = &self.result.player;
        writeln!(
            f,
            "\n{} - {}",
            player.full_name(),
            player.position.as_deref().unwrap_or("")
        )?;
        writeln!(f, "  Height: {}", field(&player.height))?;
        writeln!(f, "  Weight: {}", field(&player.weight))?;
        writeln!(f, "  College: {}", field(&player.college))?;
        writeln!(f, "  Experience: {}", field(&player.experience))?;
        writeln!(
            f,
            "  Age: {}",
            player.age.map(|age| age.to_string()).unwrap_or_default()
        )?;

        writeln!(f, "  Stats for Season {}", self.season)?;
        for entry in self.result.applicable_stats() {
            writeln!(f, "    {}: {}", entry.label(), format_value(entry.value))?;
        }
        Ok(())
    }
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Whole numbers without a trailing ".0".
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
