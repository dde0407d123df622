//! Reading a Chromium-style bookmark store and flattening its tree.
//!
//! [`load`] returns the `bookmark_bar` root as a [`Node`] tree and
//! [`flatten`] turns that tree into the ordered list of [`Bookmark`] records
//! the rest of the application works with.

mod flatten;
mod loader;
mod node;
mod record;

pub use flatten::{Leaves, flatten, leaves};
pub use loader::{LoadError, LoadErrorKind, ParseError, load, parse};
pub use node::{FolderNode, Node, UrlNode};
pub use record::Bookmark;
