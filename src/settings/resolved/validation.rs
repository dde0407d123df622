use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if config.bookmarks_path.as_os_str().is_empty() {
		return Err(ConfigError::invalid(
			"bookmarks.path",
			"",
			sources.source_for_bookmarks_path(),
			"must not be empty",
		));
	}

	if let Some(theme) = &config.theme
		&& bmz_tui::style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.as_str(),
			sources.source_for_theme(),
			format!(
				"unknown theme, expected one of {}",
				bmz_tui::style::names().join(", ")
			),
		));
	}

	for (key, header) in [
		("ui.name_header", &config.labels.name_header),
		("ui.domain_header", &config.labels.domain_header),
	] {
		if header.trim().is_empty() {
			return Err(ConfigError::invalid(
				key,
				header.as_str(),
				SettingSource::ConfigKey(key),
				"must not be empty",
			));
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use bmz_tui::UiLabels;

	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			bookmarks_path: PathBuf::from("/tmp/Bookmarks"),
			title: None,
			initial_query: String::new(),
			theme: None,
			labels: UiLabels::default(),
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_empty_bookmark_path() {
		let config = ResolvedConfig {
			bookmarks_path: PathBuf::new(),
			..config()
		};
		let sources = ConfigSources {
			bookmarks_path: Some(SettingSource::Environment("BMZ__BOOKMARKS__PATH".into())),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "bookmarks.path");
		let message = err.to_string();
		assert!(message.contains("environment variable"), "{message}");
		assert!(message.contains("must not be empty"), "{message}");
	}

	#[test]
	fn validation_rejects_unknown_themes() {
		let config = ResolvedConfig {
			theme: Some("neon".into()),
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		let message = err.to_string();
		assert!(message.contains("value: \"neon\""), "{message}");
		assert!(message.contains("slate"), "{message}");
	}

	#[test]
	fn theme_aliases_are_accepted() {
		let config = ResolvedConfig {
			theme: Some("Dark".into()),
			..config()
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_blank_headers() {
		let config = ResolvedConfig {
			labels: UiLabels::default().with_headers("Name", "  "),
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "ui.domain_header");
	}
}
