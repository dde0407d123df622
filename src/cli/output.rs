use anyhow::Result;
use bmz_core::{Bookmark, SearchOutcome};
use serde_json::json;

use super::OutputFormat;

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	if !outcome.accepted {
		println!("Search cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(bookmark) => println!("{}", bookmark.url),
		None => println!("No selection"),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": outcome.selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// Render a list of bookmarks, one `name<TAB>url` line each or a JSON array.
pub(crate) fn format_listing(format: OutputFormat, bookmarks: &[&Bookmark]) -> Result<String> {
	match format {
		OutputFormat::Plain => Ok(bookmarks
			.iter()
			.map(|bookmark| format!("{}\t{}", bookmark.name, bookmark.url))
			.collect::<Vec<_>>()
			.join("\n")),
		OutputFormat::Json => Ok(serde_json::to_string_pretty(bookmarks)?),
	}
}

pub(crate) fn print_listing(format: OutputFormat, bookmarks: &[&Bookmark]) -> Result<()> {
	let text = format_listing(format, bookmarks)?;
	if !text.is_empty() {
		println!("{text}");
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	fn github() -> Bookmark {
		Bookmark::new("GitHub", "https://github.com/", "0b5a")
	}

	#[test]
	fn json_format_includes_bookmark_selection() {
		let outcome = SearchOutcome::accepted("git", Some(github()));

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["query"], "git");
		assert_eq!(value["selection"]["name"], "GitHub");
		assert_eq!(value["selection"]["url"], "https://github.com/");
		assert_eq!(value["selection"]["guid"], "0b5a");
	}

	#[test]
	fn json_format_uses_null_without_selection() {
		let json = format_outcome_json(&SearchOutcome::cancelled("x")).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], false);
		assert!(value["selection"].is_null());
	}

	#[test]
	fn plain_listing_is_tab_separated() {
		let first = github();
		let second = Bookmark::new("docs.rs", "https://docs.rs/", "1c6b");
		let text = format_listing(OutputFormat::Plain, &[&first, &second]).unwrap();
		assert_eq!(text, "GitHub\thttps://github.com/\ndocs.rs\thttps://docs.rs/");
		assert_eq!(format_listing(OutputFormat::Plain, &[]).unwrap(), "");
	}

	#[test]
	fn json_listing_is_an_array_of_records() {
		let first = github();
		let text = format_listing(OutputFormat::Json, &[&first]).unwrap();
		let value: Value = serde_json::from_str(&text).unwrap();
		assert_eq!(value.as_array().map(Vec::len), Some(1));
		assert_eq!(value[0]["guid"], "0b5a");
	}
}
