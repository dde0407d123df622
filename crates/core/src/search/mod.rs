//! Case-insensitive substring filtering over bookmark names.
//!
//! Both the query and the names are lower-cased per character before
//! comparison. An empty query keeps every bookmark; otherwise a bookmark is
//! kept when the query occurs anywhere in its name. Order is always preserved.
//!
//! Lower-casing is context free: a capital sigma always becomes `σ`, even at
//! the end of a word where [`str::to_lowercase`] would produce `ς`. Each name
//! character lowers on its own, so [`match_indices`] can map a match back onto
//! the characters of the name.

use crate::bookmarks::Bookmark;

/// Lower-case `text` one character at a time.
#[must_use]
pub fn lowercase(text: &str) -> String {
	text.chars().flat_map(char::to_lowercase).collect()
}

/// A query prepared for repeated matching against many names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMatcher {
	needle: String,
}

impl QueryMatcher {
	#[must_use]
	pub fn new(query: &str) -> Self {
		Self {
			needle: lowercase(query),
		}
	}

	/// True when the matcher keeps everything.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.needle.is_empty()
	}

	#[must_use]
	pub fn matches(&self, name: &str) -> bool {
		self.is_empty() || lowercase(name).contains(&self.needle)
	}

	/// Like [`matches`](Self::matches) for a name already passed through [`lowercase`].
	#[must_use]
	pub fn matches_lowered(&self, lowered: &str) -> bool {
		lowered.contains(&self.needle)
	}
}

/// Return the bookmarks whose name contains `query`, in their original order.
#[must_use]
pub fn filter<'a>(bookmarks: &'a [Bookmark], query: &str) -> Vec<&'a Bookmark> {
	filter_indices(bookmarks, query)
		.into_iter()
		.map(|index| &bookmarks[index])
		.collect()
}

/// Positions of the bookmarks that [`filter`] would return.
#[must_use]
pub fn filter_indices(bookmarks: &[Bookmark], query: &str) -> Vec<usize> {
	let matcher = QueryMatcher::new(query);
	if matcher.is_empty() {
		return (0..bookmarks.len()).collect();
	}
	bookmarks
		.iter()
		.enumerate()
		.filter(|(_, bookmark)| matcher.matches(&bookmark.name))
		.map(|(index, _)| index)
		.collect()
}

/// Character positions in `name` covered by the first match of `query`.
///
/// Returns `None` for an empty query or when there is no match.
#[must_use]
pub fn match_indices(name: &str, query: &str) -> Option<Vec<usize>> {
	let needle = lowercase(query);
	if needle.is_empty() {
		return None;
	}

	// Byte offsets in `lowered` map back to the character they came from.
	let mut lowered = String::with_capacity(name.len());
	let mut origins = Vec::with_capacity(name.len());
	for (index, ch) in name.chars().enumerate() {
		for lower in ch.to_lowercase() {
			lowered.push(lower);
			origins.resize(lowered.len(), index);
		}
	}

	let start = lowered.find(&needle)?;
	let mut indices = origins[start..start + needle.len()].to_vec();
	indices.dedup();
	Some(indices)
}
