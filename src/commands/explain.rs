use anyhow::{Context, Result};

use crate::config::DisplayConfig;
use crate::data_provider::RecordSource;
use crate::formatting::{format_header, format_points};
use crate::loader::load_roster;
use crate::positions::position_label;
use crate::roster::Roster;
use crate::scoring::score_breakdown;
use crate::types::{Dataset, Player};

/// Width of the rule label column
const LABEL_COL_WIDTH: usize = 16;

/// Width of the contribution column
const VALUE_COL_WIDTH: usize = 10;

/// Find a player by nickname, ignoring case
pub fn find_player<'a>(roster: &'a Roster, nickname: &str) -> Option<&'a Player> {
    let wanted = nickname.to_lowercase();
    roster
        .players()
        .iter()
        .find(|p| p.nickname.to_lowercase() == wanted)
}

/// Per-rule breakdown of one player's fantasy score
pub fn format_breakdown(player: &Player, dataset: Dataset, display: &DisplayConfig) -> String {
    let title = format!(
        "{} ({}, {}) - {}",
        player.nickname,
        player.team,
        position_label(player.position).unwrap_or("Unknown"),
        dataset.name()
    );
    let mut output = format_header(&title, true, display);
    output.push('\n');

    let breakdown = score_breakdown(&player.stats());
    for (label, value) in breakdown.terms() {
        output.push_str(&format!(
            "{:<label_width$}{:>value_width$.2}\n",
            label,
            value,
            label_width = LABEL_COL_WIDTH,
            value_width = VALUE_COL_WIDTH
        ));
    }
    output.push_str(&format!(
        "{}\n",
        display.box_chars.horizontal.repeat(LABEL_COL_WIDTH + VALUE_COL_WIDTH)
    ));
    output.push_str(&format!(
        "{:<label_width$}{:>value_width$.2}\n",
        "Total",
        breakdown.total(),
        label_width = LABEL_COL_WIDTH,
        value_width = VALUE_COL_WIDTH
    ));
    output.push_str(&format!(
        "{:<label_width$}{:>value_width$}\n",
        "Fantasy points",
        format_points(player.fantasy_points()),
        label_width = LABEL_COL_WIDTH,
        value_width = VALUE_COL_WIDTH
    ));
    output
}

/// Load one dataset and print how a player's score is made up
pub async fn run(
    source: &dyn RecordSource,
    dataset: Dataset,
    nickname: &str,
    display: &DisplayConfig,
) -> Result<()> {
    let roster = load_roster(source, dataset).await;
    let player = find_player(&roster, nickname)
        .with_context(|| format!("No player named '{}' in {}", nickname, dataset.name()))?;
    print!("{}", format_breakdown(player, dataset, display));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{create_mock_records, MockSource};

    fn roster() -> Roster {
        Roster::load(Dataset::Regular, &create_mock_records(Dataset::Regular))
    }

    #[test]
    fn test_find_player_ignores_case() {
        let roster = roster();
        assert_eq!(find_player(&roster, "yatoro").map(|p| p.nickname.as_str()), Some("Yatoro"));
        assert!(find_player(&roster, "nobody").is_none());
    }

    #[test]
    fn test_format_breakdown() {
        let roster = roster();
        let player = find_player(&roster, "Yatoro").unwrap();
        let output = format_breakdown(player, Dataset::Regular, &DisplayConfig::default());
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines[0], "Yatoro (Team Spirit, Carry) - Regular Season");
        assert_eq!(lines[2], "");
        // one line per rule, then separator, total and points
        assert_eq!(lines.len(), 3 + 14 + 3);
        assert!(lines[3].starts_with("Kills"));
        assert!(lines[17].starts_with("──────"));
        assert!(lines[18].starts_with("Total"));
        assert!(lines[19].ends_with(&format_points(player.fantasy_points())));
    }

    #[tokio::test]
    async fn test_run_unknown_player_is_error() {
        let source = MockSource::populated();
        let err = run(&source, Dataset::Tournament, "nobody", &DisplayConfig::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No player named 'nobody' in Tournament"));
    }
}
