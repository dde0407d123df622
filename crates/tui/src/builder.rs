use anyhow::Result;
use bmz_core::{BookmarkSession, LoadError, SearchOutcome};

use crate::App;
use crate::config::UiLabels;
use crate::style::{self, Theme};

/// A small builder for configuring the interactive bookmark picker.
///
/// Presents an fzf-like API for setting the prompt, labels, theme and initial
/// query before handing the terminal over to [`App::run`].
pub struct Picker {
	source: Result<BookmarkSession, LoadError>,
	title: Option<String>,
	labels: Option<UiLabels>,
	theme: Option<Theme>,
	initial_query: Option<String>,
}

impl Picker {
	/// Create a picker over an already loaded session.
	#[must_use]
	pub fn new(session: BookmarkSession) -> Self {
		Self::from_source(Ok(session))
	}

	/// Create a picker that shows `error` instead of results.
	#[must_use]
	pub fn failed(error: LoadError) -> Self {
		Self::from_source(Err(error))
	}

	fn from_source(source: Result<BookmarkSession, LoadError>) -> Self {
		Self {
			source,
			title: None,
			labels: None,
			theme: None,
			initial_query: None,
		}
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = Some(labels);
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Select a built-in theme. Unknown names keep the current theme.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match style::by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => tracing::warn!(theme = name, "unknown theme, keeping default"),
		}
		self
	}

	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	/// Build the [`App`] without touching the terminal.
	#[must_use]
	pub fn into_app<'a>(self) -> App<'a> {
		let mut app = match self.source {
			Ok(session) => App::new(session),
			Err(error) => App::failed(error),
		};
		if let Some(labels) = self.labels {
			app.set_labels(labels);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(title) = self.title {
			app.set_title(title);
		}
		if let Some(query) = self.initial_query {
			app.set_query(query);
		}
		app
	}

	/// Run the interactive picker with the configured options.
	pub fn run(self) -> Result<SearchOutcome> {
		let mut app = self.into_app();
		app.run()
	}
}
