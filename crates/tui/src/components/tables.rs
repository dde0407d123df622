use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use super::rows::ColumnWidths;
use crate::style::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	pub headers: [&'a str; 2],
	pub widths: ColumnWidths,
	pub rows: Vec<Row<'a>>,
}

/// Split the usable width of `area` between the name and domain columns.
#[must_use]
pub fn column_widths(area: Rect) -> ColumnWidths {
	let symbol = u16::try_from(HIGHLIGHT_SYMBOL.chars().count()).unwrap_or(2);
	let usable = area
		.width
		.saturating_sub(symbol)
		.saturating_sub(TABLE_COLUMN_SPACING);
	let name = usable.saturating_mul(2) / 3;
	ColumnWidths {
		name,
		domain: usable - name,
	}
}

/// Render the bookmark table with a header row and separator.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
	let header = Row::new(header_cells)
		.style(theme.header_style())
		.height(1)
		.bottom_margin(1);

	let widths = [
		Constraint::Length(spec.widths.name),
		Constraint::Length(spec.widths.domain),
	];

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	render_header_separator(frame, area, theme, 1);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
	if header_height >= area.height {
		return;
	}
	let sep_y = area.y + header_height;

	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: sep_y,
		width: area.width,
		height: 1,
	};
	let header_bg = theme.header_bg();
	let base_style = Style::new().bg(header_bg);
	if width <= 2 {
		let para = Paragraph::new(" ".repeat(width)).style(base_style);
		frame.render_widget(para, sep_rect);
		return;
	}

	let middle = "─".repeat(width - 2);
	let middle_style = Style::new().bg(header_bg).fg(theme.header_fg());
	let spans = vec![
		Span::styled(" ", base_style),
		Span::styled(middle, middle_style),
		Span::styled(" ", base_style),
	];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}
