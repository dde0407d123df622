/// Text rendered around the bookmark table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Shown before the query when no custom title is set.
	pub prompt_title: String,
	/// Greyed-out text displayed while the query is empty.
	pub placeholder: String,
	/// Heading of the name column.
	pub name_header: String,
	/// Heading of the domain column.
	pub domain_header: String,
	/// Shown in place of rows when nothing matches.
	pub empty_message: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			prompt_title: "Bookmarks".to_string(),
			placeholder: "Search sidekick bookmarks...".to_string(),
			name_header: "Name".to_string(),
			domain_header: "Domain".to_string(),
			empty_message: "No results".to_string(),
		}
	}
}

impl UiLabels {
	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn with_headers(mut self, name: impl Into<String>, domain: impl Into<String>) -> Self {
		self.name_header = name.into();
		self.domain_header = domain.into();
		self
	}

	/// Column headings in render order.
	#[must_use]
	pub fn headers(&self) -> [&str; 2] {
		[&self.name_header, &self.domain_header]
	}
}
