use std::path::PathBuf;

use clap::Parser;

use super::{RawConfig, env_var_for};
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"bmz",
		"--title",
		"Sidekick",
		"-q",
		"rust",
		"--theme",
		"light",
	]);

	let mut config = RawConfig::default();
	config.ui.title = Some("from file".into());
	config.ui.theme = Some("solarized".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.ui.title, cli.title);
	assert_eq!(config.ui.initial_query, cli.initial_query);
	assert_eq!(config.ui.theme, cli.theme);
}

#[test]
fn defaults_resolve_to_the_sidekick_store() {
	let cli = CliArgs::parse_from(["bmz", "-n"]);
	let Ok(resolved) = RawConfig::default().resolve(&cli) else {
		// No home directory in this environment.
		return;
	};
	assert!(resolved.bookmarks_path.ends_with("Sidekick/Default/Bookmarks"));
	assert_eq!(resolved.initial_query, "");
	assert_eq!(resolved.labels, bmz_tui::UiLabels::default());
}

#[test]
fn configured_paths_and_labels_are_used() {
	let cli = CliArgs::parse_from(["bmz"]);
	let mut config = RawConfig::default();
	config.bookmarks.path = Some(PathBuf::from("/srv/profile/Bookmarks"));
	config.ui.name_header = Some(" Title ".into());
	config.ui.placeholder = Some("type to search".into());

	let resolved = config.resolve(&cli).unwrap();
	assert_eq!(resolved.bookmarks_path, PathBuf::from("/srv/profile/Bookmarks"));
	assert_eq!(resolved.labels.headers(), ["Title", "Domain"]);
	assert_eq!(resolved.labels.placeholder, "type to search");
}

#[test]
fn empty_path_is_rejected_with_its_origin() {
	let cli = CliArgs::parse_from(["bmz"]);
	let mut config = RawConfig::default();
	config.bookmarks.path = Some(PathBuf::new());

	let err = config.resolve(&cli).unwrap_err();
	let message = err.to_string();
	assert!(message.contains("bookmarks.path"), "{message}");
}

#[test]
fn unknown_theme_from_cli_names_the_flag() {
	let cli = CliArgs::parse_from(["bmz", "--theme", "neon"]);
	let mut config = RawConfig::default();
	config.bookmarks.path = Some(PathBuf::from("/tmp/Bookmarks"));
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("--theme"), "{message}");
	assert!(message.contains("neon"), "{message}");
}

#[test]
fn env_var_names_follow_the_separator() {
	assert_eq!(env_var_for("bookmarks.path"), "BMZ__BOOKMARKS__PATH");
	assert_eq!(env_var_for("ui.theme"), "BMZ__UI__THEME");
}
