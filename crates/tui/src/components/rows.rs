use bmz_core::Bookmark;
use bmz_core::search::match_indices;
use ratatui::style::Style;
use ratatui::widgets::Row;

use super::highlight::{TruncationStyle, highlight_cell};

/// Character widths available to each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
	pub name: u16,
	pub domain: u16,
}

/// Build one table row per bookmark, highlighting `query` in the name.
#[must_use]
pub fn build_bookmark_rows<'a, I>(
	bookmarks: I,
	query: &str,
	widths: Option<ColumnWidths>,
	highlight_style: Style,
) -> Vec<Row<'static>>
where
	I: IntoIterator<Item = &'a Bookmark>,
{
	bookmarks
		.into_iter()
		.map(|bookmark| {
			let domain = bookmark.domain().unwrap_or_else(|| bookmark.url.clone());
			Row::new([
				highlight_cell(
					&bookmark.name,
					match_indices(&bookmark.name, query),
					widths.map(|w| w.name),
					TruncationStyle::Right,
					highlight_style,
				),
				highlight_cell(
					&domain,
					None,
					widths.map(|w| w.domain),
					TruncationStyle::Left,
					highlight_style,
				),
			])
		})
		.collect()
}
