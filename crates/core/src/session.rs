use std::path::Path;

use crate::bookmarks::{self, Bookmark, LoadError};
use crate::search::{QueryMatcher, lowercase};

/// The bookmarks of one search session together with the active query.
///
/// The list is loaded once. Every query change recomputes the visible subset
/// from the full list.
#[derive(Debug, Clone, Default)]
pub struct BookmarkSession {
	bookmarks: Vec<Bookmark>,
	lowered_names: Vec<String>,
	query: String,
	filtered: Vec<usize>,
}

impl BookmarkSession {
	#[must_use]
	pub fn new(bookmarks: Vec<Bookmark>) -> Self {
		let lowered_names = bookmarks.iter().map(|b| lowercase(&b.name)).collect();
		let filtered = (0..bookmarks.len()).collect();
		Self {
			bookmarks,
			lowered_names,
			query: String::new(),
			filtered,
		}
	}

	#[must_use]
	pub fn empty() -> Self {
		Self::default()
	}

	/// Load and flatten the bookmark store at `path`.
	///
	/// # Errors
	///
	/// Propagates the [`LoadError`] from reading or parsing the store.
	pub fn load(path: &Path) -> Result<Self, LoadError> {
		let root = bookmarks::load(path)?;
		let session = Self::new(bookmarks::flatten(&root));
		tracing::info!(
			path = %path.display(),
			count = session.len(),
			"loaded bookmarks"
		);
		Ok(session)
	}

	/// Replace the query and recompute the visible bookmarks.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
		let matcher = QueryMatcher::new(&self.query);
		self.filtered = if matcher.is_empty() {
			(0..self.bookmarks.len()).collect()
		} else {
			self.lowered_names
				.iter()
				.enumerate()
				.filter(|(_, name)| matcher.matches_lowered(name))
				.map(|(index, _)| index)
				.collect()
		};
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Every bookmark in tree order, regardless of the query.
	#[must_use]
	pub fn bookmarks(&self) -> &[Bookmark] {
		&self.bookmarks
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.bookmarks.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.bookmarks.is_empty()
	}

	#[must_use]
	pub fn filtered_len(&self) -> usize {
		self.filtered.len()
	}

	/// Bookmarks matching the current query, in tree order.
	pub fn results(&self) -> impl ExactSizeIterator<Item = &Bookmark> + '_ {
		self.filtered.iter().map(|&index| &self.bookmarks[index])
	}

	/// The `position`-th visible bookmark.
	#[must_use]
	pub fn get(&self, position: usize) -> Option<&Bookmark> {
		let index = *self.filtered.get(position)?;
		self.bookmarks.get(index)
	}
}
