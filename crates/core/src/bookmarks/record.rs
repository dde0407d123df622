use serde::Serialize;
use url::Url;

use super::node::UrlNode;

/// Flat record produced for every url entry of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bookmark {
	pub name: String,
	pub url: String,
	pub guid: String,
}

impl Bookmark {
	#[must_use]
	pub fn new(name: impl Into<String>, url: impl Into<String>, guid: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			url: url.into(),
			guid: guid.into(),
		}
	}

	/// Host part of the bookmark's address, if it has one.
	#[must_use]
	pub fn domain(&self) -> Option<String> {
		let parsed = Url::parse(&self.url).ok()?;
		parsed.host_str().map(str::to_owned)
	}
}

impl From<&UrlNode> for Bookmark {
	fn from(node: &UrlNode) -> Self {
		Self {
			name: node.name.clone(),
			url: node.url.clone(),
			guid: node.guid.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn domain_is_taken_from_the_host() {
		let bookmark = Bookmark::new("Docs", "https://docs.rs/serde/latest", "g");
		assert_eq!(bookmark.domain().as_deref(), Some("docs.rs"));
	}

	#[test]
	fn domain_is_absent_for_hostless_urls() {
		assert_eq!(Bookmark::new("js", "javascript:void(0)", "g").domain(), None);
		assert_eq!(Bookmark::new("bad", "not a url", "g").domain(), None);
	}
}
