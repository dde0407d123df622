use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::builtins::BUILT_IN_DEFINITIONS;
use super::types::Theme;

#[derive(Debug, Default)]
struct ThemeRegistry {
	canonical: BTreeMap<String, (&'static str, Theme)>,
	aliases: HashMap<String, String>,
}

impl ThemeRegistry {
	fn built_in() -> Self {
		let mut registry = Self::default();
		for definition in BUILT_IN_DEFINITIONS {
			let normalized = normalize_name(definition.name);
			for alias in definition.aliases {
				registry
					.aliases
					.insert(normalize_name(alias), normalized.clone());
			}
			registry
				.canonical
				.insert(normalized, (definition.name, definition.theme));
		}
		registry
	}

	fn get(&self, name: &str) -> Option<Theme> {
		let normalized = normalize_name(name);
		let key = self.aliases.get(&normalized).unwrap_or(&normalized);
		self.canonical.get(key).map(|(_, theme)| *theme)
	}
}

fn registry() -> &'static ThemeRegistry {
	static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();
	REGISTRY.get_or_init(ThemeRegistry::built_in)
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	registry().get(name)
}

/// Return the canonical theme names, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
	registry()
		.canonical
		.values()
		.map(|(name, _)| *name)
		.collect()
}
