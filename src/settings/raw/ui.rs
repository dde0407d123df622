use bmz_tui::UiLabels;
use serde::Deserialize;

use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) name_header: Option<String>,
	pub(super) domain_header: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) title: Option<String>,
	pub(super) initial_query: String,
	pub(super) theme: Option<String>,
	pub(super) labels: UiLabels,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut labels = UiLabels::default();
		if let Some(placeholder) = self.placeholder {
			labels = labels.with_placeholder(placeholder);
		}
		if self.name_header.is_some() || self.domain_header.is_some() {
			let name = self.name_header.unwrap_or_else(|| labels.name_header.clone());
			let domain = self.domain_header.unwrap_or_else(|| labels.domain_header.clone());
			labels = labels.with_headers(name.trim(), domain.trim());
		}

		UiResolution {
			title: self.title,
			initial_query: self.initial_query.unwrap_or_default(),
			theme: self.theme,
			labels,
		}
	}
}
