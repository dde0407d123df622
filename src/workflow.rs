use anyhow::{Context, Result};
use bmz_core::{Bookmark, BookmarkSession, SearchOutcome};
use bmz_tui::{Picker, UiLabels};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search experience.
pub(crate) struct SearchWorkflow {
	picker: Picker,
}

impl SearchWorkflow {
	/// Load the bookmark store and prepare the picker.
	///
	/// A store that cannot be loaded still yields a picker, which shows the
	/// error in place of results.
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let picker = PickerFactory::build(config);
		Self { picker }
	}

	pub(crate) fn run(self) -> Result<SearchOutcome> {
		self.picker.run()
	}
}

/// Load the store and return the bookmarks matching the configured initial query.
pub(crate) fn list_matches(config: &ResolvedConfig) -> Result<Vec<Bookmark>> {
	let mut session = BookmarkSession::load(&config.bookmarks_path)
		.context("failed to load bookmarks")?;
	session.set_query(config.initial_query.as_str());
	Ok(session.results().cloned().collect())
}

/// Helper for translating resolved configuration into a configured [`Picker`].
struct PickerFactory {
	picker: Picker,
}

impl PickerFactory {
	fn build(config: ResolvedConfig) -> Picker {
		let ResolvedConfig {
			bookmarks_path,
			title,
			initial_query,
			theme,
			labels,
		} = config;

		let picker = match BookmarkSession::load(&bookmarks_path) {
			Ok(session) => Picker::new(session),
			Err(err) => {
				tracing::error!(
					path = %err.path().display(),
					kind = ?err.kind(),
					error = &err as &(dyn std::error::Error + 'static),
					"failed to load bookmarks"
				);
				Picker::failed(err)
			}
		};

		Self { picker }
			.with_labels(labels)
			.with_title(title)
			.with_theme(theme)
			.with_initial_query(initial_query)
			.finish()
	}

	fn with_labels(mut self, labels: UiLabels) -> Self {
		self.picker = self.picker.with_labels(labels);
		self
	}

	fn with_title(mut self, title: Option<String>) -> Self {
		if let Some(title) = title {
			self.picker = self.picker.with_title(title);
		}
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Self {
		if let Some(theme) = theme {
			self.picker = self.picker.with_theme_name(&theme);
		}
		self
	}

	fn with_initial_query(mut self, query: String) -> Self {
		if !query.is_empty() {
			self.picker = self.picker.with_initial_query(query);
		}
		self
	}

	fn finish(self) -> Picker {
		self.picker
	}
}
