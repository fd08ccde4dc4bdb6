use anyhow::Result;
use std::sync::Arc;

use crate::columns::Column;
use crate::config::DisplayConfig;
use crate::controller::{SortDirection, TableController};
use crate::data_provider::RecordSource;
use crate::formatting::format_header;
use crate::loader::load_roster;
use crate::roster::{PositionFilter, Roster};
use crate::tui::table::{fit_cell, leaderboard_columns, CellValue};
use crate::types::Dataset;

/// Marker printed after a column's best value
const BEST_MARKER: char = '*';

/// Marker printed after a column's worst value
const WORST_MARKER: char = '!';

/// Space between columns
const COLUMN_GAP: &str = " ";

fn marker(cell: &CellValue) -> char {
    match cell {
        CellValue::Best(_) => BEST_MARKER,
        CellValue::Worst(_) => WORST_MARKER,
        CellValue::Text(_) => ' ',
    }
}

/// Render a leaderboard as plain text
///
/// Every cell carries a one-character marker slot: `*` for the column's best
/// value, `!` for its worst. The header's slot shows the sort indicator.
pub fn format_leaderboard(roster: &Roster, controller: &TableController, display: &DisplayConfig) -> String {
    let mut output = format_header(
        &format!("{} ({} players)", roster.dataset().name(), roster.len()),
        true,
        display,
    );
    output.push('\n');

    if roster.is_empty() {
        output.push_str("No players loaded\n");
        return output;
    }

    let rows = controller.visible_rows(roster);
    if rows.is_empty() {
        output.push_str("No players match the selected positions\n");
        return output;
    }

    let columns = leaderboard_columns(Arc::new(controller.column_stats(roster)));

    let header = columns
        .iter()
        .zip(Column::ALL)
        .map(|(def, column)| {
            let indicator = match controller.sort_indicator(column) {
                Some(SortDirection::Ascending) => display.box_chars.sort_asc.as_str(),
                Some(SortDirection::Descending) => display.box_chars.sort_desc.as_str(),
                None => " ",
            };
            format!("{}{}", fit_cell(&def.header, def.width, def.align), indicator)
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    let table_width = header.chars().count();
    output.push_str(header.trim_end());
    output.push('\n');
    output.push_str(&display.box_chars.horizontal.repeat(table_width));
    output.push('\n');

    for player in rows {
        let line = columns
            .iter()
            .map(|def| {
                let cell = (def.cell_fn)(player);
                format!("{}{}", fit_cell(cell.display_text(), def.width, def.align), marker(&cell))
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format!("{} best  {} worst\n", BEST_MARKER, WORST_MARKER));
    output
}

/// Load one dataset and print its leaderboard
pub async fn run(
    source: &dyn RecordSource,
    dataset: Dataset,
    filter: PositionFilter,
    sort: Option<Column>,
    descending: bool,
    display: &DisplayConfig,
) -> Result<()> {
    let roster = load_roster(source, dataset).await;

    let mut controller = TableController::new(filter);
    controller.bind(&roster);
    if let Some(column) = sort {
        let direction = if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        controller.sort_by(&roster, column, direction);
    }

    print!("{}", format_leaderboard(&roster, &controller, display));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::create_mock_records;

    fn regular_roster() -> Roster {
        Roster::load(Dataset::Regular, &create_mock_records(Dataset::Regular))
    }

    fn controller(roster: &Roster, positions: &[u8]) -> TableController {
        let mut controller = TableController::new(PositionFilter::new(positions.iter().copied()));
        controller.bind(roster);
        controller
    }

    #[test]
    fn test_format_leaderboard_layout() {
        let roster = regular_roster();
        let output = format_leaderboard(&roster, &controller(&roster, &[1]), &DisplayConfig::default());
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines[0], "Regular Season (15 players)");
        assert_eq!(lines[1], "═".repeat(lines[0].chars().count()));
        assert_eq!(lines[2], "");
        assert!(lines[3].starts_with("Pos"));
        assert!(lines[4].starts_with("───"));
        // three carries, then a blank line and the legend
        assert_eq!(lines.len(), 5 + 3 + 2);
        assert_eq!(lines[9], "* best  ! worst");
    }

    #[test]
    fn test_format_leaderboard_marks_best_and_worst() {
        let roster = regular_roster();
        let output = format_leaderboard(&roster, &controller(&roster, &[1]), &DisplayConfig::default());

        // Kills among carries: Yatoro 8.2 is best, Satanic 6.8 is worst
        let yatoro = output.lines().find(|l| l.contains("Yatoro")).unwrap();
        let satanic = output.lines().find(|l| l.contains("Satanic")).unwrap();
        assert!(yatoro.contains("8.20*"));
        assert!(satanic.contains("6.80!"));
    }

    #[test]
    fn test_format_leaderboard_sorted_by_nickname() {
        let roster = regular_roster();
        let mut controller = controller(&roster, &crate::roster::ALL_POSITIONS);
        controller.sort_by(&roster, Column::Nickname, SortDirection::Ascending);
        let output = format_leaderboard(&roster, &controller, &DisplayConfig::default());
        let lines: Vec<_> = output.lines().collect();

        assert!(lines[3].contains(&format!("{:<14}▲", "Player")));
        assert_eq!(lines[5].split_whitespace().nth(1), Some("33"));
        assert_eq!(lines[6].split_whitespace().nth(1), Some("9Class"));
    }

    #[test]
    fn test_format_leaderboard_empty_filter() {
        let roster = regular_roster();
        let output = format_leaderboard(&roster, &controller(&roster, &[]), &DisplayConfig::default());
        assert!(output.ends_with("No players match the selected positions\n"));
    }

    #[test]
    fn test_format_leaderboard_empty_roster() {
        let roster = Roster::load(Dataset::Tournament, &[]);
        let output = format_leaderboard(&roster, &TableController::default(), &DisplayConfig::default());
        assert!(output.starts_with("Tournament (0 players)\n"));
        assert!(output.ends_with("No players loaded\n"));
    }

    #[tokio::test]
    async fn test_run_with_mock_source() {
        let source = crate::fixtures::MockSource::populated();
        let result = run(
            &source,
            Dataset::Tournament,
            PositionFilter::default(),
            Some(Column::FantasyPoints),
            true,
            &DisplayConfig::default(),
        )
        .await;
        assert!(result.is_ok());
    }
}
