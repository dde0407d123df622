use serde::Deserialize;
use serde_json::Value;

/// One entry of the bookmark tree.
///
/// The `type` field of the stored object selects the variant. Anything that is
/// not a well-formed url or folder entry becomes [`Node::Unknown`], so a single
/// corrupt entry never aborts loading the rest of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Url(UrlNode),
	Folder(FolderNode),
	Unknown { kind: Option<String> },
}

/// A leaf entry pointing at an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlNode {
	pub name: String,
	pub guid: String,
	pub url: String,
}

/// A container entry. An absent `children` field yields an empty folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
	pub name: String,
	pub guid: String,
	pub children: Vec<Node>,
}

/// Field-level view of a stored entry before its `type` is interpreted.
///
/// Children stay as raw values so a malformed child only affects itself.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawNode {
	#[serde(rename = "type")]
	kind: Option<String>,
	name: Option<String>,
	guid: Option<String>,
	url: Option<String>,
	children: Option<Vec<Value>>,
}

impl Node {
	/// Build a node from a parsed JSON value. Never fails.
	#[must_use]
	pub fn from_value(value: Value) -> Self {
		match serde_json::from_value::<RawNode>(value) {
			Ok(raw) => raw.into_node(),
			Err(err) => {
				tracing::trace!(%err, "skipping malformed bookmark entry");
				Self::Unknown { kind: None }
			}
		}
	}

	/// Convenience constructor for a url entry.
	#[must_use]
	pub fn url(name: impl Into<String>, url: impl Into<String>, guid: impl Into<String>) -> Self {
		Self::Url(UrlNode {
			name: name.into(),
			guid: guid.into(),
			url: url.into(),
		})
	}

	/// Convenience constructor for a folder entry.
	#[must_use]
	pub fn folder(name: impl Into<String>, children: Vec<Node>) -> Self {
		Self::Folder(FolderNode {
			name: name.into(),
			guid: String::new(),
			children,
		})
	}

	#[must_use]
	pub fn name(&self) -> Option<&str> {
		match self {
			Self::Url(node) => Some(&node.name),
			Self::Folder(node) => Some(&node.name),
			Self::Unknown { .. } => None,
		}
	}
}

impl RawNode {
	fn into_node(self) -> Node {
		let name = self.name.unwrap_or_default();
		let guid = self.guid.unwrap_or_default();
		match (self.kind.as_deref(), self.url) {
			(Some("url"), Some(url)) => Node::Url(UrlNode { name, guid, url }),
			(Some("folder"), _) => Node::Folder(FolderNode {
				name,
				guid,
				children: self
					.children
					.unwrap_or_default()
					.into_iter()
					.map(Node::from_value)
					.collect(),
			}),
			_ => Node::Unknown { kind: self.kind },
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn url_entries_keep_their_fields() {
		let node = Node::from_value(json!({
			"type": "url",
			"name": "Example",
			"url": "https://example.com",
			"guid": "g1",
			"date_added": "13312345678901234",
		}));
		assert_eq!(node, Node::url("Example", "https://example.com", "g1"));
	}

	#[test]
	fn folder_without_children_is_empty() {
		let node = Node::from_value(json!({ "type": "folder", "name": "Empty" }));
		let Node::Folder(folder) = node else {
			panic!("expected a folder, got {node:?}");
		};
		assert_eq!(folder.name, "Empty");
		assert!(folder.children.is_empty());
	}

	#[test]
	fn unrecognised_shapes_become_unknown() {
		assert_eq!(
			Node::from_value(json!({ "type": "separator", "name": "---" })),
			Node::Unknown {
				kind: Some("separator".into())
			}
		);
		assert_eq!(
			Node::from_value(json!({ "type": "url", "name": "no address" })),
			Node::Unknown {
				kind: Some("url".into())
			}
		);
		assert_eq!(Node::from_value(json!("just a string")), Node::Unknown { kind: None });
		assert_eq!(
			Node::from_value(json!({ "type": "url", "url": 42 })),
			Node::Unknown { kind: None }
		);
	}

	#[test]
	fn malformed_child_does_not_poison_siblings() {
		let node = Node::from_value(json!({
			"type": "folder",
			"children": [
				{ "type": "url", "name": 7, "url": "https://broken.example" },
				{ "type": "url", "name": "Fine", "url": "https://fine.example", "guid": "g2" },
			],
		}));
		let Node::Folder(folder) = node else {
			panic!("expected a folder");
		};
		assert_eq!(folder.children.len(), 2);
		assert_eq!(folder.children[0], Node::Unknown { kind: None });
		assert_eq!(folder.children[1].name(), Some("Fine"));
	}

	#[test]
	fn missing_name_and_guid_default_to_empty() {
		let node = Node::from_value(json!({ "type": "url", "url": "https://example.com" }));
		assert_eq!(node, Node::url("", "https://example.com", ""));
	}
}
