//! Resolve configuration, cache, and home directories for `bmz`.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::{BaseDirs, ProjectDirs};

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "bmz";

const CONFIG_DIR_ENV: &str = "BMZ_CONFIG_DIR";
const CACHE_DIR_ENV: &str = "BMZ_CACHE_DIR";

/// Location of the Sidekick bookmark store relative to the home directory.
pub const DEFAULT_BOOKMARKS_PATH: &str = "Library/Application Support/Sidekick/Default/Bookmarks";

/// Return the platform-specific directory layout for the application.
fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for bmz"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value so that callers can
/// use shell defaults without worrying about trailing whitespace.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the configuration directory used to look up `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the cache directory, which also holds the log file.
pub fn get_cache_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.cache_dir().to_path_buf())
}

/// Return the current user's home directory.
pub fn home_dir() -> Result<PathBuf> {
	BaseDirs::new()
		.map(|dirs| dirs.home_dir().to_path_buf())
		.ok_or_else(|| anyhow!("unable to determine the home directory"))
}

/// Return the bookmark store path used when no override is configured.
pub fn default_bookmarks_path() -> Result<PathBuf> {
	Ok(home_dir()?.join(DEFAULT_BOOKMARKS_PATH))
}

/// Expand a leading `~` component against `home`.
#[must_use]
pub fn expand_home(path: &Path, home: &Path) -> PathBuf {
	match path.strip_prefix("~") {
		Ok(rest) => home.join(rest),
		Err(_) => path.to_path_buf(),
	}
}
