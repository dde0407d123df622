use crate::bookmarks::Bookmark;

/// Captures how a search interaction ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
	pub accepted: bool,
	pub query: String,
	pub selection: Option<Bookmark>,
}

impl SearchOutcome {
	/// Outcome for a search the user abandoned.
	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selection: None,
		}
	}

	/// Outcome for a confirmed search, possibly with nothing selected.
	#[must_use]
	pub fn accepted(query: impl Into<String>, selection: Option<Bookmark>) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			selection,
		}
	}

	/// Address of the chosen bookmark, if the search was confirmed with one.
	#[must_use]
	pub fn selected_url(&self) -> Option<&str> {
		if !self.accepted {
			return None;
		}
		self.selection.as_ref().map(|bookmark| bookmark.url.as_str())
	}
}
