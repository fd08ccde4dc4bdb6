/// Generic table framework types
///
/// This module provides core types for building tables whose cells may be
/// highlighted:
/// - CellValue: Plain text, or text marked as its column's best/worst value
/// - ColumnDef: Column definition with cell extraction function
/// - Alignment: Text alignment for cells
use std::fmt;
use std::sync::Arc;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::columns::{Column, ColumnKind};
use crate::roster::{ColumnStats, Highlight};
use crate::types::Player;

/// Value types that can appear in table cells
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    /// Plain text cell
    Text(String),

    /// Best value of its column
    Best(String),

    /// Worst value of its column
    Worst(String),
}

impl CellValue {
    /// Wrap display text according to a highlight class
    pub fn from_highlight(text: String, highlight: Highlight) -> Self {
        match highlight {
            Highlight::Best => Self::Best(text),
            Highlight::Worst => Self::Worst(text),
            Highlight::None => Self::Text(text),
        }
    }

    /// Get the display text for this cell
    pub fn display_text(&self) -> &str {
        match self {
            Self::Text(s) | Self::Best(s) | Self::Worst(s) => s,
        }
    }

    pub fn highlight(&self) -> Highlight {
        match self {
            Self::Text(_) => Highlight::None,
            Self::Best(_) => Highlight::Best,
            Self::Worst(_) => Highlight::Worst,
        }
    }
}

/// Text alignment for table cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

/// Column definition for a table
///
/// Defines how to extract and display a column's data from row items.
///
/// # Type Parameters
/// - `T`: The row data type
pub struct ColumnDef<T> {
    /// Column header text
    pub header: String,

    /// Column width in characters
    pub width: usize,

    /// Text alignment
    pub align: Alignment,

    /// Function to extract cell value from row data
    pub cell_fn: Box<dyn Fn(&T) -> CellValue + Send + Sync>,
}

impl<T> ColumnDef<T> {
    /// Create a new column definition
    ///
    /// # Arguments
    /// - `header`: Column header text
    /// - `width`: Column width in characters
    /// - `align`: Text alignment (Left, Right, Center)
    /// - `cell_fn`: Function to extract CellValue from row data
    pub fn new<F>(header: impl Into<String>, width: usize, align: Alignment, cell_fn: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        Self {
            header: header.into(),
            width,
            align,
            cell_fn: Box::new(cell_fn),
        }
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("header", &self.header)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("cell_fn", &"<function>")
            .finish()
    }
}

/// Pad `text` to `width` terminal columns, truncating with "..." when too long
///
/// Widths are display widths, so wide glyphs in nicknames keep columns aligned.
pub fn fit_cell(text: &str, width: usize, align: Alignment) -> String {
    let text_width = text.width();
    if text_width > width {
        let keep = if width > 3 { width - 3 } else { width };
        let mut used = 0;
        let mut truncated: String = text
            .chars()
            .take_while(|c| {
                used += c.width().unwrap_or(0);
                used <= keep
            })
            .collect();
        if width > 3 {
            truncated.push_str("...");
        }
        let pad = width.saturating_sub(truncated.width());
        return format!("{}{}", truncated, " ".repeat(pad));
    }

    let pad = width - text_width;
    match align {
        Alignment::Left => format!("{}{}", text, " ".repeat(pad)),
        Alignment::Right => format!("{}{}", " ".repeat(pad), text),
        Alignment::Center => {
            let left_pad = pad / 2;
            format!("{}{}{}", " ".repeat(left_pad), text, " ".repeat(pad - left_pad))
        }
    }
}

/// Column definitions for a leaderboard, highlighting against `stats`
///
/// Text columns are left-aligned, everything else right-aligned.
pub fn leaderboard_columns(stats: Arc<ColumnStats>) -> Vec<ColumnDef<Player>> {
    Column::ALL
        .iter()
        .map(|&column| {
            let align = match column.kind() {
                ColumnKind::Text => Alignment::Left,
                ColumnKind::Numeric | ColumnKind::Percentage => Alignment::Right,
            };
            let stats = Arc::clone(&stats);
            ColumnDef::new(column.header(), column.width(), align, move |p: &Player| {
                let highlight = column
                    .metric()
                    .map(|m| stats.highlight(m, p))
                    .unwrap_or(Highlight::None);
                CellValue::from_highlight(column.format(p), highlight)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::create_mock_record;
    use crate::normalize::normalize;
    use crate::types::Dataset;

    #[test]
    fn test_cell_value_text() {
        let cell = CellValue::from_highlight("42".into(), Highlight::None);
        assert_eq!(cell, CellValue::Text("42".into()));
        assert_eq!(cell.display_text(), "42");
        assert_eq!(cell.highlight(), Highlight::None);
    }

    #[test]
    fn test_cell_value_highlighted() {
        let best = CellValue::from_highlight("9.00".into(), Highlight::Best);
        let worst = CellValue::from_highlight("1.00".into(), Highlight::Worst);
        assert_eq!(best.display_text(), "9.00");
        assert_eq!(best.highlight(), Highlight::Best);
        assert_eq!(worst.highlight(), Highlight::Worst);
    }

    #[test]
    fn test_column_def_debug() {
        let col: ColumnDef<Player> =
            ColumnDef::new("K", 5, Alignment::Right, |p: &Player| CellValue::Text(p.kills.to_string()));
        let debug = format!("{:?}", col);
        assert!(debug.contains("\"K\""));
        assert!(debug.contains("<function>"));
    }

    #[test]
    fn test_leaderboard_columns_highlight() {
        let strong = normalize(&create_mock_record("Strong", "A", 1, 9.0), Dataset::Regular);
        let weak = normalize(&create_mock_record("Weak", "B", 1, 1.0), Dataset::Regular);
        let stats = Arc::new(ColumnStats::compute(&[&strong, &weak]));
        let columns = leaderboard_columns(stats);

        assert_eq!(columns.len(), 19);
        assert_eq!(columns[1].align, Alignment::Left);
        assert_eq!(columns[4].align, Alignment::Right);

        // kills column
        assert_eq!((columns[4].cell_fn)(&strong), CellValue::Best("9.00".into()));
        assert_eq!((columns[4].cell_fn)(&weak), CellValue::Worst("1.00".into()));
        // nickname never highlighted
        assert_eq!((columns[1].cell_fn)(&strong), CellValue::Text("Strong".into()));
        // equal deaths: no highlight
        assert_eq!((columns[5].cell_fn)(&strong).highlight(), Highlight::None);
    }

    #[test]
    fn test_fit_cell_alignment() {
        assert_eq!(fit_cell("ab", 5, Alignment::Left), "ab   ");
        assert_eq!(fit_cell("ab", 5, Alignment::Right), "   ab");
        assert_eq!(fit_cell("ab", 5, Alignment::Center), " ab  ");
    }

    #[test]
    fn test_fit_cell_truncates() {
        assert_eq!(fit_cell("Collapse", 6, Alignment::Left), "Col...");
        assert_eq!(fit_cell("Collapse", 3, Alignment::Left), "Col");
    }

    #[test]
    fn test_fit_cell_wide_glyphs() {
        // each CJK glyph takes two terminal columns
        assert_eq!(fit_cell("天才", 6, Alignment::Left), "天才  ");
        assert_eq!(fit_cell("天才天才", 6, Alignment::Left), "天... ");
    }

}
