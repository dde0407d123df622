//! Single-line query editor backed by `tui-textarea`.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::TextArea;

/// The search field. Only ever holds one line.
#[derive(Debug, Clone)]
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
	placeholder: String,
	placeholder_style: Style,
}

impl<'a> QueryInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let initial: String = initial.into();
		let mut textarea = TextArea::new(vec![initial.replace(['\n', '\r'], " ")]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		Self {
			textarea,
			placeholder: String::new(),
			placeholder_style: Style::default(),
		}
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map_or("", String::as_str)
	}

	/// Apply a key press. Returns true when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_newline(key) {
			return false;
		}
		self.textarea.input(key)
	}

	/// Dimmed text shown in place of an empty query.
	pub fn set_placeholder(&mut self, text: impl Into<String>, style: Style) {
		self.placeholder = text.into();
		self.placeholder_style = style;
	}

	/// The placeholder to draw, or `None` once something has been typed.
	#[must_use]
	pub fn placeholder(&self) -> Option<(&str, Style)> {
		(self.text().is_empty() && !self.placeholder.is_empty())
			.then_some((self.placeholder.as_str(), self.placeholder_style))
	}

	#[must_use]
	pub fn widget(&self) -> &TextArea<'a> {
		&self.textarea
	}
}

fn is_newline(key: KeyEvent) -> bool {
	matches!(key.code, KeyCode::Enter)
		|| (key.modifiers.contains(KeyModifiers::CONTROL)
			&& matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')))
}
