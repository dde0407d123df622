//! Interactive terminal picker for `bmz`.
//!
//! This crate owns the prompt, the results table and the event loop that turn
//! a [`bmz_core::BookmarkSession`] into a [`bmz_core::SearchOutcome`].

mod actions;
mod app;
mod builder;
pub mod components;
mod config;
pub mod input;
mod render;
mod runtime;
pub mod style;

pub use app::App;
pub use builder::Picker;
pub use config::UiLabels;

pub use crate::components::{prompt, rows, tables};
pub use crate::input::QueryInput;
pub use crate::style::{Theme, default_theme};
