//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point: it layers config files, environment
//! variables and CLI flags, then returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
