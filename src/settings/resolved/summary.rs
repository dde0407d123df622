use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Bookmark file: {}", config.bookmarks_path.display());
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	);
	if let Some(title) = &config.title {
		let _ = writeln!(out, "  Prompt title: {title}");
	}
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	let _ = writeln!(out, "  Placeholder: {}", config.labels.placeholder);
	let _ = writeln!(out, "  Headers: {}", config.labels.headers().join(", "));
	out
}
