use std::slice;

use super::node::{Node, UrlNode};
use super::record::Bookmark;

/// Depth-first, pre-order iterator over the url entries of a tree.
///
/// Folders are descended in child order, unknown entries are skipped along
/// with anything beneath them.
#[derive(Debug, Clone)]
pub struct Leaves<'a> {
	stack: Vec<slice::Iter<'a, Node>>,
}

/// Walk `root` lazily, yielding url entries in pre-order.
#[must_use]
pub fn leaves(root: &Node) -> Leaves<'_> {
	Leaves {
		stack: vec![slice::from_ref(root).iter()],
	}
}

/// Collect every url entry below `root` into flat records, in pre-order.
#[must_use]
pub fn flatten(root: &Node) -> Vec<Bookmark> {
	leaves(root).map(Bookmark::from).collect()
}

impl<'a> Iterator for Leaves<'a> {
	type Item = &'a UrlNode;

	fn next(&mut self) -> Option<Self::Item> {
		while let Some(level) = self.stack.last_mut() {
			let Some(node) = level.next() else {
				self.stack.pop();
				continue;
			};
			match node {
				Node::Url(leaf) => return Some(leaf),
				Node::Folder(folder) if !folder.children.is_empty() => {
					self.stack.push(folder.children.iter());
				}
				Node::Folder(_) | Node::Unknown { .. } => {}
			}
		}
		None
	}
}
