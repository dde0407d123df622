use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use bmz_core::app_dirs;
use config::{Config, ConfigError, File};

use crate::cli::CliArgs;

/// Prefix of environment variables read as configuration, e.g. `BMZ__UI__THEME`.
pub(super) const ENV_PREFIX: &str = "BMZ";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.prefix_separator("__")
			.separator("__"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".bmz.toml"));
		files.push(current_dir.join("bmz.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".bmz.toml")));
		assert!(files.iter().any(|path| path.ends_with("bmz.toml")));
	}

	#[test]
	fn explicit_files_are_merged() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("extra.toml");
		fs::write(&path, "[ui]\ntheme = \"light\"\n").unwrap();

		let cli = CliArgs::parse_from([
			"bmz",
			"--no-config",
			"--config",
			path.to_str().unwrap(),
		]);
		let config = build_config(&cli).unwrap();
		assert_eq!(config.get_string("ui.theme").unwrap(), "light");
	}

	#[test]
	fn missing_explicit_files_are_errors() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("absent.toml");
		let cli = CliArgs::parse_from(["bmz", "-n", "-c", path.to_str().unwrap()]);
		assert!(build_config(&cli).is_err());
	}
}
