use std::mem;

use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Cell;
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

/// Which end of an over-long value is replaced by an ellipsis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncationStyle {
	Left,
	Right,
}

/// Build a table cell that highlights the characters at `indices` within `text`.
pub fn highlight_cell(
	text: &str,
	indices: Option<Vec<usize>>,
	max_width: Option<u16>,
	truncation: TruncationStyle,
	highlight_style: Style,
) -> Cell<'static> {
	let (display_text, indices) = if let Some(width) = max_width.map(usize::from) {
		truncate_with_highlight(text, indices, width, truncation)
	} else {
		(text.to_string(), indices)
	};

	let Some(mut sorted_indices) = indices.filter(|indices| !indices.is_empty()) else {
		return Cell::from(display_text);
	};
	sorted_indices.sort_unstable();
	let mut next = sorted_indices.into_iter().peekable();
	let mut buffer = String::new();
	let mut highlighted = false;
	let mut spans = Vec::new();

	for (idx, ch) in display_text.chars().enumerate() {
		let should_highlight = next.peek().copied() == Some(idx);
		if should_highlight {
			next.next();
		}
		if should_highlight != highlighted {
			if !buffer.is_empty() {
				spans.push(styled(mem::take(&mut buffer), highlighted, highlight_style));
			}
			highlighted = should_highlight;
		}
		buffer.push(ch);
	}

	if !buffer.is_empty() {
		spans.push(styled(buffer, highlighted, highlight_style));
	}

	Cell::from(Text::from(Line::from(spans)))
}

fn styled(text: String, highlighted: bool, highlight_style: Style) -> Span<'static> {
	if highlighted {
		Span::styled(text, highlight_style)
	} else {
		Span::raw(text)
	}
}

pub(crate) fn truncate_with_highlight(
	text: &str,
	indices: Option<Vec<usize>>,
	max_width: usize,
	truncation: TruncationStyle,
) -> (String, Option<Vec<usize>>) {
	if max_width == 0 {
		return (String::new(), None);
	}

	let original_width = text.width();
	if original_width <= max_width {
		return (text.to_string(), indices);
	}

	let ellipsis = "…";
	let ellipsis_width = ellipsis.width();
	if max_width <= ellipsis_width {
		return (ellipsis.to_string(), None);
	}

	let available = max_width - ellipsis_width;
	match truncation {
		TruncationStyle::Right => {
			let (slice, _) = text.unicode_truncate(available);
			let mut truncated = slice.to_string();
			truncated.push_str(ellipsis);
			let limit = slice.chars().count();
			let indices = indices.and_then(|indices| {
				let adjusted: Vec<usize> = indices.into_iter().filter(|&idx| idx < limit).collect();
				(!adjusted.is_empty()).then_some(adjusted)
			});
			(truncated, indices)
		}
		TruncationStyle::Left => {
			let (slice, _) = text.unicode_truncate_start(available);
			let mut truncated = ellipsis.to_string();
			truncated.push_str(slice);
			let slice_len = slice.chars().count();
			let trimmed = text.chars().count().saturating_sub(slice_len);
			let indices = indices.and_then(|indices| {
				let adjusted: Vec<usize> = indices
					.into_iter()
					.filter_map(|idx| idx.checked_sub(trimmed))
					.filter(|&idx| idx < slice_len)
					.map(|idx| idx + 1)
					.collect();
				(!adjusted.is_empty()).then_some(adjusted)
			});
			(truncated, indices)
		}
	}
}
