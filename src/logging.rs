//! File logging for the `bmz` binary.
//!
//! The picker owns the terminal, so log lines go to `<cache dir>/bmz.log`.
//! Verbosity follows `BMZ_LOG` using `EnvFilter` directives.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use bmz_core::app_dirs;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_ENV: &str = "BMZ_LOG";
const LOG_FILE: &str = "bmz.log";
const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global subscriber. Failure only disables logging.
pub fn initialize() {
	match try_initialize() {
		Ok(path) => tracing::debug!(path = %path.display(), "logging initialized"),
		Err(err) => eprintln!("bmz: logging disabled: {err:#}"),
	}
}

fn try_initialize() -> Result<PathBuf> {
	let dir = app_dirs::get_cache_dir()?;
	fs::create_dir_all(&dir)
		.with_context(|| format!("failed to create cache directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	build_subscriber(file, env_filter()).try_init()?;
	Ok(path)
}

fn env_filter() -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

fn build_subscriber(log_file: File, filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync {
	let fmt_layer = fmt::layer()
		.with_ansi(false)
		.with_writer(Arc::new(log_file));

	tracing_subscriber::registry().with(fmt_layer).with(filter)
}
