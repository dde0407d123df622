mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::{Context, Result};
use bmz_core::SearchOutcome;
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_listing, print_plain};
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in bmz_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	logging::initialize();

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if cli.list {
		let matches = workflow::list_matches(&resolved)?;
		let refs = matches.iter().collect::<Vec<_>>();
		return print_listing(cli.output, &refs);
	}

	run_search(&cli, resolved)
}

/// Execute the search workflow and print output in the chosen format.
fn run_search(cli: &CliArgs, settings: ResolvedConfig) -> Result<()> {
	let workflow = SearchWorkflow::from_config(settings);
	let outcome = workflow.run()?;

	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	if cli.open {
		open_selection(&outcome)?;
	}

	Ok(())
}

fn open_selection(outcome: &SearchOutcome) -> Result<()> {
	let Some(url) = outcome.selected_url() else {
		return Ok(());
	};
	tracing::info!(url, "opening bookmark");
	open::that(url).with_context(|| format!("failed to open {url}"))
}
