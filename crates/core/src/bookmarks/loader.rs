use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::node::Node;

/// Failure to produce the bookmark tree. Both cases are fatal to a load.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("bookmark file {} could not be read", path.display())]
	NotFound {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("bookmark file {} is not a valid bookmark store", path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: ParseError,
	},
}

/// Why the contents of a bookmark store were rejected.
#[derive(Debug, Error)]
pub enum ParseError {
	#[error(transparent)]
	Json(#[from] serde_json::Error),
	#[error("missing `roots.bookmark_bar`")]
	MissingRoot,
}

/// Coarse classification of a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
	NotFound,
	Parse,
}

impl LoadError {
	#[must_use]
	pub fn kind(&self) -> LoadErrorKind {
		match self {
			Self::NotFound { .. } => LoadErrorKind::NotFound,
			Self::Parse { .. } => LoadErrorKind::Parse,
		}
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		match self {
			Self::NotFound { path, .. } | Self::Parse { path, .. } => path,
		}
	}
}

#[derive(Debug, Deserialize)]
struct StoreFile {
	roots: Roots,
}

#[derive(Debug, Deserialize)]
struct Roots {
	#[serde(default)]
	bookmark_bar: Option<Value>,
}

/// Read the bookmark store at `path` and return its bookmark bar root.
///
/// The file is read in a single call and is not held open afterwards.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if the file cannot be read and
/// [`LoadError::Parse`] if its contents are not a bookmark store.
pub fn load(path: &Path) -> Result<Node, LoadError> {
	let bytes = fs::read(path).map_err(|source| LoadError::NotFound {
		path: path.to_path_buf(),
		source,
	})?;
	tracing::debug!(path = %path.display(), bytes = bytes.len(), "read bookmark store");

	parse(&bytes).map_err(|source| LoadError::Parse {
		path: path.to_path_buf(),
		source,
	})
}

/// Parse the UTF-8 JSON contents of a bookmark store.
///
/// Only `roots.bookmark_bar` is returned; the other roots are ignored.
/// Folder nesting depth is not limited.
///
/// # Errors
///
/// Returns [`ParseError::Json`] for invalid text or an unexpected top-level
/// shape, and [`ParseError::MissingRoot`] when the bookmark bar is absent.
pub fn parse(bytes: &[u8]) -> Result<Node, ParseError> {
	let mut json = serde_json::Deserializer::from_slice(bytes);
	json.disable_recursion_limit();
	let store = StoreFile::deserialize(serde_stacker::Deserializer::new(&mut json))?;
	json.end()?;
	match store.roots.bookmark_bar {
		Some(Value::Null) | None => Err(ParseError::MissingRoot),
		Some(root) => Ok(Node::from_value(root)),
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use tempfile::NamedTempFile;

	use super::*;
	use crate::bookmarks::Bookmark;

	const STORE: &str = r#"{
		"checksum": "0123456789abcdef",
		"roots": {
			"bookmark_bar": {
				"children": [
					{ "guid": "g1", "name": "Example", "type": "url", "url": "https://example.com" }
				],
				"guid": "root", "name": "Bookmarks bar", "type": "folder"
			},
			"other": {
				"children": [
					{ "guid": "g9", "name": "Elsewhere", "type": "url", "url": "https://other.test" }
				],
				"name": "Other bookmarks", "type": "folder"
			}
		},
		"version": 1
	}"#;

	#[test]
	fn parse_returns_only_the_bookmark_bar() {
		let root = parse(STORE.as_bytes()).unwrap();
		let Node::Folder(folder) = root else {
			panic!("expected folder root");
		};
		assert_eq!(folder.name, "Bookmarks bar");
		assert_eq!(folder.children, vec![Node::url("Example", "https://example.com", "g1")]);
	}

	#[test]
	fn missing_bookmark_bar_is_a_parse_error() {
		let err = parse(br#"{ "roots": { "other": {} } }"#).unwrap_err();
		assert!(matches!(err, ParseError::MissingRoot));
		let err = parse(br#"{ "roots": { "bookmark_bar": null } }"#).unwrap_err();
		assert!(matches!(err, ParseError::MissingRoot));
	}

	#[test]
	fn malformed_content_is_a_parse_error() {
		assert!(matches!(parse(b"{ not json"), Err(ParseError::Json(_))));
		assert!(matches!(parse(b"{}"), Err(ParseError::Json(_))));
		assert!(matches!(parse(&[0xff, 0xfe, 0x00]), Err(ParseError::Json(_))));
	}

	fn nested_store(depth: usize) -> String {
		let mut bar = r#"{ "guid": "deep", "name": "Bottom", "type": "url", "url": "https://bottom.test" }"#
			.to_string();
		for level in 0..depth {
			bar = format!(r#"{{ "children": [{bar}], "name": "Level {level}", "type": "folder" }}"#);
		}
		format!(r#"{{ "roots": {{ "bookmark_bar": {bar} }} }}"#)
	}

	#[test]
	fn deeply_nested_folders_are_accepted() {
		let root = parse(nested_store(200).as_bytes()).unwrap();
		assert_eq!(root.name(), Some("Level 199"));
		assert_eq!(
			crate::bookmarks::flatten(&root),
			vec![Bookmark::new("Bottom", "https://bottom.test", "deep")]
		);
	}

	#[test]
	fn trailing_content_after_the_store_is_rejected() {
		let text = format!("{STORE} {{}}");
		assert!(matches!(parse(text.as_bytes()), Err(ParseError::Json(_))));
	}

	#[test]
	fn load_reads_from_disk() {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(STORE.as_bytes()).unwrap();

		let root = load(file.path()).unwrap();
		assert_eq!(root.name(), Some("Bookmarks bar"));
	}

	#[test]
	fn missing_file_is_not_found() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("Bookmarks");

		let err = load(&path).unwrap_err();
		assert_eq!(err.kind(), LoadErrorKind::NotFound);
		assert_eq!(err.path(), path.as_path());
	}

	#[test]
	fn invalid_file_reports_parse_kind() {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(b"[]").unwrap();

		let err = load(file.path()).unwrap_err();
		assert_eq!(err.kind(), LoadErrorKind::Parse);
		assert!(err.to_string().contains("not a valid bookmark store"));
	}
}
