//! Core crate for `bmz`: loading a browser bookmark store, flattening it and
//! filtering the result.
//!
//! The root module re-exports the types most callers need so that the
//! terminal front end and the CLI do not have to dig through the module
//! hierarchy.

pub mod app_dirs;
pub mod bookmarks;
mod outcome;
pub mod search;
mod session;

pub use crate::bookmarks::{Bookmark, LoadError, LoadErrorKind, Node};
pub use crate::outcome::SearchOutcome;
pub use crate::search::filter;
pub use crate::session::BookmarkSession;
