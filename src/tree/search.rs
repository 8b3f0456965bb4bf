use crate::error::{ParseError, Result};
use crate::tree::node::Node;
use std::collections::VecDeque;

impl<'a> Node<'a> {
	/// First node named `name` in the subtree rooted here, this node
	/// included, in breadth-first order.
	pub fn find_one(self, name: &str) -> Option<Node<'a>> {
		bfs(self).find(|node| node.name() == name)
	}

	/// Every node named `name` in the subtree rooted here, this node
	/// included, in breadth-first order.
	pub fn find_all(self, name: &str) -> Vec<Node<'a>> {
		bfs(self).filter(|node| node.name() == name).collect()
	}

	/// Every node of the subtree rooted here, level by level.
	pub fn breadth_first(self) -> impl Iterator<Item = Node<'a>> + 'a {
		bfs(self)
	}
}

/// Find the first node named `name` below `node`.
///
/// An absent start node is reported as `ParseError::NullNode`; a search that
/// finds nothing is `Ok(None)`.
pub fn find_one<'a>(node: Option<Node<'a>>, name: &str) -> Result<Option<Node<'a>>> {
	let node = node.ok_or(ParseError::NullNode)?;
	Ok(node.find_one(name))
}

/// Find every node named `name` below `node`.
pub fn find_all<'a>(node: Option<Node<'a>>, name: &str) -> Result<Vec<Node<'a>>> {
	let node = node.ok_or(ParseError::NullNode)?;
	Ok(node.find_all(name))
}

/// True iff `node` has no parent.
pub fn is_root(node: Node<'_>) -> bool {
	node.is_root()
}

fn bfs(start: Node<'_>) -> Bfs<'_> {
	Bfs {
		queue: VecDeque::from([start]),
	}
}

/// Level-order traversal; each node's children are queued when it is visited.
struct Bfs<'a> {
	queue: VecDeque<Node<'a>>,
}

impl<'a> Iterator for Bfs<'a> {
	type Item = Node<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		let node = self.queue.pop_front()?;
		self.queue.extend(node.children());
		Some(node)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tree::node::NodeKind::{Directive, Section};
	use crate::tree::node::{ConfigTree, NodeId};

	// Root
	// ├── Listen 80            (line 1)
	// ├── <Directory />        (line 2)
	// │   ├── Options None     (line 3)
	// │   └── <IfModule a>     (line 4)
	// │       └── Options All  (line 5)
	// └── Options Indexes      (line 7)
	fn build() -> ConfigTree {
		let mut tree = ConfigTree::new();
		tree.create_child(NodeId::ROOT, Directive, "Listen", "80", 1).unwrap();
		let dir = tree.create_child(NodeId::ROOT, Section, "Directory", "/", 2).unwrap();
		tree.create_child(dir, Directive, "Options", "None", 3).unwrap();
		let ifmod = tree.create_child(dir, Section, "IfModule", "a", 4).unwrap();
		tree.create_child(ifmod, Directive, "Options", "All", 5).unwrap();
		tree.create_child(NodeId::ROOT, Directive, "Options", "Indexes", 7).unwrap();
		tree
	}

	#[test]
	fn test_find_one_prefers_shallower_match() {
		let tree = build();
		let found = tree.find_one("Options").unwrap();

		// Document order would give line 3; breadth-first reaches line 7 first.
		assert_eq!(found.content(), "Indexes");
		assert_eq!(found.line(), 7);
	}

	#[test]
	fn test_find_one_is_deterministic() {
		let tree = build();
		let first = tree.find_one("Options");
		for _ in 0..5 {
			assert_eq!(tree.find_one("Options"), first);
		}
	}

	#[test]
	fn test_find_one_includes_start_node() {
		let tree = build();
		let dir = tree.find_one("Directory").unwrap();
		assert_eq!(dir.find_one("Directory"), Some(dir));
	}

	#[test]
	fn test_find_one_scoped_to_subtree() {
		let tree = build();
		let dir = tree.find_one("Directory").unwrap();

		assert_eq!(dir.find_one("Options").unwrap().content(), "None");
		assert!(dir.find_one("Listen").is_none());
	}

	#[test]
	fn test_find_one_missing_name() {
		let tree = build();
		assert!(tree.find_one("ServerName").is_none());
	}

	#[test]
	fn test_find_all_breadth_first_order() {
		let tree = build();
		let contents: Vec<_> = tree.find_all("Options").iter().map(|n| n.content()).collect();
		assert_eq!(contents, vec!["Indexes", "None", "All"]);
	}

	#[test]
	fn test_find_all_count_matches_tree() {
		let tree = build();
		let expected = tree.iter().filter(|n| n.name() == "Options").count();
		assert_eq!(tree.find_all("Options").len(), expected);
		assert!(tree.find_all("Nope").is_empty());
	}

	#[test]
	fn test_root_matches_empty_name() {
		// The root is the only node with an empty name.
		let tree = build();
		assert_eq!(tree.find_all(""), vec![tree.root()]);
	}

	#[test]
	fn test_free_functions_report_null_node() {
		assert!(matches!(find_one(None, "Listen"), Err(ParseError::NullNode)));
		assert!(matches!(find_all(None, "Listen"), Err(ParseError::NullNode)));

		let tree = build();
		let found = find_one(Some(tree.root()), "Listen").unwrap().unwrap();
		assert_eq!(found.content(), "80");
		assert_eq!(find_all(Some(tree.root()), "IfModule").unwrap().len(), 1);
	}

	#[test]
	fn test_is_root() {
		let tree = build();
		assert!(is_root(tree.root()));
		for node in tree.iter().skip(1) {
			assert!(!is_root(node));
		}
	}

	#[test]
	fn test_breadth_first_visits_every_node_once() {
		let tree = build();
		let lines: Vec<_> = tree.root().breadth_first().map(|n| n.line()).collect();
		assert_eq!(lines, vec![0, 1, 2, 7, 3, 4, 5]);
	}
}
