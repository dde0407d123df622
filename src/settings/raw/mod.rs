use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use super::sources::ENV_PREFIX;

mod bookmarks;
mod ui;

use bookmarks::BookmarksSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	bookmarks: BookmarksSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			bookmarks_path: detect_source(
				None,
				self.bookmarks.path.is_some(),
				"bookmarks.path",
			),
			theme: detect_source(
				cli.theme.is_some().then_some("--theme"),
				self.ui.theme.is_some(),
				"ui.theme",
			),
		};

		let bookmarks_path = self.bookmarks.resolve()?;
		let ui = self.ui.finalize();

		let config = ResolvedConfig {
			bookmarks_path,
			title: ui.title,
			initial_query: ui.initial_query,
			theme: ui.theme,
			labels: ui.labels,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

/// Name of the environment variable that maps onto the dotted `key`.
fn env_var_for(key: &str) -> String {
	let path = key.replace('.', "__").to_ascii_uppercase();
	format!("{ENV_PREFIX}__{path}")
}

fn detect_source(
	cli_flag: Option<&'static str>,
	value_present: bool,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if let Some(flag) = cli_flag {
		return Some(SettingSource::CliFlag(flag));
	}

	let var = env_var_for(key);
	if env::var_os(&var).is_some() {
		return Some(SettingSource::Environment(var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
