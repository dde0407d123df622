use bmz_core::{Bookmark, BookmarkSession, LoadError};
use ratatui::widgets::TableState;

use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::Theme;

/// State of one interactive picker session.
pub struct App<'a> {
	pub(crate) session: BookmarkSession,
	pub(crate) input: QueryInput<'a>,
	pub(crate) table_state: TableState,
	pub(crate) title: Option<String>,
	pub(crate) labels: UiLabels,
	pub(crate) theme: Theme,
	pub(crate) load_error: Option<String>,
}

impl App<'_> {
	pub fn new(session: BookmarkSession) -> Self {
		let mut app = Self {
			input: QueryInput::new(session.query()),
			session,
			table_state: TableState::default(),
			title: None,
			labels: UiLabels::default(),
			theme: Theme::default(),
			load_error: None,
		};
		app.apply_input_style();
		app.ensure_selection();
		app
	}

	/// An app with no rows that displays why loading failed.
	pub fn failed(error: LoadError) -> Self {
		let mut app = Self::new(BookmarkSession::empty());
		app.load_error = Some(format!("{:#}", anyhow::Error::new(error)));
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.apply_input_style();
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.labels = labels;
		self.apply_input_style();
	}

	pub fn set_title(&mut self, title: impl Into<String>) {
		self.title = Some(title.into());
	}

	/// Replace the query text and refilter.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.input = QueryInput::new(query);
		self.apply_input_style();
		self.refresh_results();
	}

	#[must_use]
	pub fn query(&self) -> &str {
		self.input.text()
	}

	#[must_use]
	pub fn filtered_len(&self) -> usize {
		self.session.filtered_len()
	}

	#[must_use]
	pub fn load_error(&self) -> Option<&str> {
		self.load_error.as_deref()
	}

	/// Bookmark under the cursor, if any.
	#[must_use]
	pub fn selected(&self) -> Option<&Bookmark> {
		self.session.get(self.table_state.selected()?)
	}

	pub(crate) fn title(&self) -> &str {
		self.title.as_deref().unwrap_or(&self.labels.prompt_title)
	}

	/// Recompute the visible rows from the current input text.
	pub(crate) fn refresh_results(&mut self) {
		self.session.set_query(self.input.text());
		self.table_state.select(Some(0));
		self.ensure_selection();
	}

	pub(crate) fn ensure_selection(&mut self) {
		let len = self.filtered_len();
		if len == 0 {
			self.table_state.select(None);
		} else if self.table_state.selected().is_none() {
			self.table_state.select(Some(0));
		} else if let Some(selected) = self.table_state.selected()
			&& selected >= len
		{
			self.table_state.select(Some(len - 1));
		}
	}

	fn apply_input_style(&mut self) {
		let placeholder = self.labels.placeholder.clone();
		self.input
			.set_placeholder(placeholder, self.theme.empty_style());
	}
}
