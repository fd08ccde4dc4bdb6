/// Generic table widget for displaying rows with highlighted cells
///
/// The widget supports:
/// - Column-based layout with customizable alignment
/// - Best/worst cell colouring from the display theme
/// - A sort indicator on one header
/// - Cell selection (focused and unfocused states)
/// - Horizontal scrolling that keeps the selected column on screen
///
/// Selection and sort state live in the table controller, not in the
/// widget; the parent builds a fresh widget from controller state on every
/// frame.
///
/// ```ignore
/// let columns = leaderboard_columns(Arc::new(stats));
/// let table = TableWidget::from_data(&columns, rows)
///     .with_selection(controller.cursor_row(), controller.cursor_column())
///     .with_focused(true)
///     .with_sort(Some((4, SortDirection::Ascending)));
/// Element::Widget(Box::new(table))
/// ```
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::{DisplayConfig, SELECTION_STYLE_MODIFIER};
use crate::controller::SortDirection;
use crate::roster::Highlight;
use crate::tui::component::ElementWidget;
use crate::tui::table::fit_cell;
use crate::tui::{Alignment, CellValue, ColumnDef};

/// Width of the selector indicator space (e.g., "► " or "  ")
const SELECTOR_WIDTH: usize = 2;

/// Spaces between adjacent columns
const COLUMN_GAP: usize = 1;

/// Lines used by the column header and its separator
const HEADER_LINES: u16 = 2;

#[derive(Clone, Debug)]
pub struct TableWidget {
    column_headers: Vec<String>,
    column_widths: Vec<usize>,
    column_aligns: Vec<Alignment>,
    cell_data: Vec<Vec<CellValue>>,
    focused: bool,
    selected_row: Option<usize>,
    selected_col: Option<usize>,
    sort: Option<(usize, SortDirection)>,
}

impl TableWidget {
    /// Extracts all cell data upfront from the rows using column definitions
    pub fn from_data<T>(columns: &[ColumnDef<T>], rows: &[&T]) -> Self {
        let cell_data = rows
            .iter()
            .map(|row| columns.iter().map(|col| (col.cell_fn)(*row)).collect())
            .collect();

        Self {
            column_headers: columns.iter().map(|c| c.header.clone()).collect(),
            column_widths: columns.iter().map(|c| c.width).collect(),
            column_aligns: columns.iter().map(|c| c.align).collect(),
            cell_data,
            focused: false,
            selected_row: None,
            selected_col: None,
            sort: None,
        }
    }

    /// Whether this table owns keyboard focus
    pub fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Select the cell under the cursor
    pub fn with_selection(mut self, row: usize, col: usize) -> Self {
        self.selected_row = Some(row);
        self.selected_col = Some(col);
        self
    }

    /// Column carrying the sort indicator
    pub fn with_sort(mut self, sort: Option<(usize, SortDirection)>) -> Self {
        self.sort = sort;
        self
    }

    pub fn column_count(&self) -> usize {
        self.column_headers.len()
    }

    fn header_text(&self, col_idx: usize, config: &DisplayConfig) -> String {
        let header = &self.column_headers[col_idx];
        match self.sort {
            Some((sorted, SortDirection::Ascending)) if sorted == col_idx => {
                format!("{}{}", header, config.box_chars.sort_asc)
            }
            Some((sorted, SortDirection::Descending)) if sorted == col_idx => {
                format!("{}{}", header, config.box_chars.sort_desc)
            }
            _ => header.clone(),
        }
    }

    fn selection_style(&self, config: &DisplayConfig) -> Style {
        let fg = if self.focused {
            config.theme.selection_fg
        } else {
            config.theme.unfocused_selection_fg()
        };
        Style::default().fg(fg).add_modifier(SELECTION_STYLE_MODIFIER)
    }

    fn cell_style(&self, is_selected: bool, cell: &CellValue, config: &DisplayConfig) -> Style {
        if is_selected {
            return self.selection_style(config);
        }
        match cell.highlight() {
            Highlight::Best => Style::default()
                .fg(config.theme.best_fg)
                .add_modifier(Modifier::BOLD),
            Highlight::Worst => Style::default().fg(config.theme.worst_fg),
            Highlight::None => Style::default(),
        }
    }

    /// First column to draw so that the selected column fits in `width`
    fn first_visible_column(&self, width: usize) -> usize {
        let Some(selected) = self.selected_col else {
            return 0;
        };
        let selected = selected.min(self.column_count().saturating_sub(1));
        let available = width.saturating_sub(SELECTOR_WIDTH);

        let mut first = 0;
        while first < selected {
            let span: usize = self.column_widths[first..=selected].iter().sum::<usize>()
                + (selected - first) * COLUMN_GAP;
            if span <= available {
                break;
            }
            first += 1;
        }
        first
    }

    /// First row to draw so that the selected row fits in `height` rows
    fn first_visible_row(&self, height: usize) -> usize {
        match self.selected_row {
            Some(row) if height > 0 && row >= height => row + 1 - height,
            _ => 0,
        }
    }

    /// Columns to draw as (index, x offset), clipped to the area width
    fn visible_columns(&self, area: Rect) -> Vec<(usize, u16)> {
        let first = self.first_visible_column(area.width as usize);
        let mut x = area.x + SELECTOR_WIDTH as u16;
        let mut columns = Vec::new();
        for col_idx in first..self.column_count() {
            let width = self.column_widths[col_idx] as u16;
            if x.saturating_add(width) > area.right() {
                break;
            }
            columns.push((col_idx, x));
            x += width + COLUMN_GAP as u16;
        }
        columns
    }
}

impl ElementWidget for TableWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let columns = self.visible_columns(area);
        let mut y = area.y;

        // Column headers
        let header_style = Style::default().add_modifier(Modifier::BOLD);
        for &(col_idx, x) in &columns {
            let width = self.column_widths[col_idx];
            let text = self.header_text(col_idx, config);
            let formatted = fit_cell(&text, width, self.column_aligns[col_idx]);
            let style = if self.selected_col == Some(col_idx) {
                self.selection_style(config)
            } else {
                header_style
            };
            buf.set_string(x, y, &formatted, style);
        }
        y += 1;

        // Separator under headers
        if y < area.bottom() {
            if let (Some(&(_, first_x)), Some(&(last_idx, last_x))) = (columns.first(), columns.last()) {
                let end = last_x as usize + self.column_widths[last_idx];
                let separator = config.box_chars.horizontal.repeat(end - first_x as usize);
                buf.set_string(first_x, y, &separator, Style::default());
            }
            y += 1;
        }

        let body_height = area.bottom().saturating_sub(y) as usize;
        let first_row = self.first_visible_row(body_height);

        for (row_idx, row_cells) in self.cell_data.iter().enumerate().skip(first_row) {
            if y >= area.bottom() {
                break;
            }

            let is_row_selected = self.selected_row == Some(row_idx);
            let selector = if is_row_selected {
                format!("{} ", config.box_chars.selector)
            } else {
                " ".repeat(SELECTOR_WIDTH)
            };
            buf.set_string(area.x, y, &selector, Style::default());

            for &(col_idx, x) in &columns {
                let Some(cell) = row_cells.get(col_idx) else {
                    continue;
                };
                let width = self.column_widths[col_idx];
                let formatted = fit_cell(cell.display_text(), width, self.column_aligns[col_idx]);
                let is_selected = is_row_selected && self.selected_col == Some(col_idx);
                buf.set_string(x, y, &formatted, self.cell_style(is_selected, cell, config));
            }

            y += 1;
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(HEADER_LINES + self.cell_data.len() as u16)
    }
}
