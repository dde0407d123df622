use std::path::PathBuf;

use anyhow::Result;
use bmz_core::app_dirs;
use serde::Deserialize;

/// Location of the bookmark store as read from configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct BookmarksSection {
	pub(super) path: Option<PathBuf>,
}

impl BookmarksSection {
	/// Expand a configured path or fall back to the Sidekick default.
	///
	/// An empty configured path is passed through so validation can report it.
	pub(super) fn resolve(self) -> Result<PathBuf> {
		match self.path {
			Some(path) if path.starts_with("~") => {
				Ok(app_dirs::expand_home(&path, &app_dirs::home_dir()?))
			}
			Some(path) => Ok(path),
			None => app_dirs::default_bookmarks_path(),
		}
	}
}
