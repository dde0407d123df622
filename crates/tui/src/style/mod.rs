//! Visual styling for the picker.
//!
//! Themes are plain colour schemes; [`theme::by_name`] resolves the names
//! accepted on the command line and in configuration files.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, by_name, default_theme, names};
