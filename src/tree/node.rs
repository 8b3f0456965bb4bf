use crate::error::{ParseError, Result};

/// Index of a node inside its [`ConfigTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
	/// The root of every tree.
	pub const ROOT: NodeId = NodeId(0);

	/// Position of the node in creation (document) order.
	pub fn index(self) -> usize {
		self.0
	}
}

/// Whether a node came from a `<Name args>` tag or a single-line directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
	Section,
	Directive,
}

/// A directive or section entry.
///
/// The root is the only node with an empty `name` and `content` and no
/// `parent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNode {
	/// Directive or section tag name.
	pub name: String,

	/// Everything after the name, e.g. `172.20.30.40:4000` for a
	/// `<VirtualHost 172.20.30.40:4000>` section.
	pub content: String,

	/// Enclosing node. Upward navigation only; the tree owns every node.
	pub parent: Option<NodeId>,

	/// Child nodes in document order.
	pub children: Vec<NodeId>,

	/// Sections keep their kind even when they end up with no children.
	pub kind: NodeKind,

	/// 1-based source line, 0 for the root.
	pub line: usize,
}

/// An ordered, rooted n-ary tree of configuration nodes.
///
/// Nodes are only ever appended while parsing; once built, the tree is
/// read-only and can be shared between threads for lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigTree {
	nodes: Vec<ConfigNode>,
	cursor: NodeId,
}

impl Default for ConfigTree {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigTree {
	/// Create a tree holding only the synthetic root.
	pub fn new() -> Self {
		ConfigTree {
			nodes: vec![ConfigNode {
				name: String::new(),
				content: String::new(),
				parent: None,
				children: Vec::new(),
				kind: NodeKind::Section,
				line: 0,
			}],
			cursor: NodeId::ROOT,
		}
	}

	/// Append a new child under `parent`.
	///
	/// This is the only way nodes enter a tree, so every non-root node has a
	/// non-empty name and content and a parent that lists it as a child.
	pub(crate) fn create_child(
		&mut self,
		parent: NodeId,
		kind: NodeKind,
		name: &str,
		content: &str,
		line: usize,
	) -> Result<NodeId> {
		if name.is_empty() {
			return Err(ParseError::EmptyName { line });
		}
		if content.is_empty() {
			return Err(ParseError::EmptyContent {
				line,
				name: name.to_string(),
			});
		}
		if parent.0 >= self.nodes.len() {
			return Err(ParseError::NullParent);
		}

		let id = NodeId(self.nodes.len());
		self.nodes.push(ConfigNode {
			name: name.to_string(),
			content: content.to_string(),
			parent: Some(parent),
			children: Vec::new(),
			kind,
			line,
		});
		self.nodes[parent.0].children.push(id);

		tracing::trace!(?kind, name, content, line, parent = parent.0, "created node");
		Ok(id)
	}

	pub(crate) fn set_cursor(&mut self, cursor: NodeId) {
		self.cursor = cursor;
	}

	/// The top of the tree.
	pub fn root(&self) -> Node<'_> {
		Node {
			tree: self,
			id: NodeId::ROOT,
		}
	}

	/// Where the parse cursor stopped after the last line.
	///
	/// Equal to [`ConfigTree::root`] when every section was closed.
	pub fn cursor(&self) -> Node<'_> {
		Node {
			tree: self,
			id: self.cursor,
		}
	}

	/// Look up a node by id.
	pub fn get(&self, id: NodeId) -> Option<Node<'_>> {
		(id.0 < self.nodes.len()).then_some(Node { tree: self, id })
	}

	/// Number of nodes, root included.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// True when the tree holds nothing but the root.
	pub fn is_empty(&self) -> bool {
		self.nodes.len() == 1
	}

	/// Every node in document order, root first.
	pub fn iter(&self) -> impl Iterator<Item = Node<'_>> {
		(0..self.nodes.len()).map(move |i| Node {
			tree: self,
			id: NodeId(i),
		})
	}

	/// First node named `name` in breadth-first order from the root.
	pub fn find_one(&self, name: &str) -> Option<Node<'_>> {
		self.root().find_one(name)
	}

	/// Every node named `name` in breadth-first order from the root.
	pub fn find_all(&self, name: &str) -> Vec<Node<'_>> {
		self.root().find_all(name)
	}

	fn data(&self, id: NodeId) -> &ConfigNode {
		&self.nodes[id.0]
	}
}

/// A borrowed handle to one node of a [`ConfigTree`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
	tree: &'a ConfigTree,
	id: NodeId,
}

impl<'a> Node<'a> {
	pub fn id(&self) -> NodeId {
		self.id
	}

	pub fn tree(&self) -> &'a ConfigTree {
		self.tree
	}

	/// The underlying node record.
	pub fn node(&self) -> &'a ConfigNode {
		self.tree.data(self.id)
	}

	pub fn name(&self) -> &'a str {
		&self.node().name
	}

	pub fn content(&self) -> &'a str {
		&self.node().content
	}

	pub fn line(&self) -> usize {
		self.node().line
	}

	pub fn kind(&self) -> NodeKind {
		self.node().kind
	}

	/// True for `<Name args>` sections, empty or not. The root counts as one.
	pub fn is_section(&self) -> bool {
		self.node().kind == NodeKind::Section
	}

	pub fn parent(&self) -> Option<Node<'a>> {
		self.node().parent.map(|id| Node {
			tree: self.tree,
			id,
		})
	}

	/// True iff this node has no parent.
	pub fn is_root(&self) -> bool {
		self.node().parent.is_none()
	}

	pub fn children(self) -> impl ExactSizeIterator<Item = Node<'a>> + 'a {
		let tree = self.tree;
		self.node()
			.children
			.iter()
			.map(move |&id| Node { tree, id })
	}

	pub fn child_count(&self) -> usize {
		self.node().children.len()
	}

	/// Parent, grandparent, and so on up to the root.
	pub fn ancestors(self) -> impl Iterator<Item = Node<'a>> + 'a {
		std::iter::successors(self.parent(), |node| node.parent())
	}

	/// Content with one pair of surrounding double quotes removed.
	pub fn unquoted_content(&self) -> &'a str {
		let content = self.content();
		content
			.strip_prefix('"')
			.and_then(|rest| rest.strip_suffix('"'))
			.unwrap_or(content)
	}

	/// Content split on whitespace, keeping double-quoted runs together.
	///
	/// `"My Site" *:80` yields `My Site` and `*:80`. An unterminated quote
	/// runs to the end of the content.
	pub fn args(&self) -> Vec<&'a str> {
		split_args(self.content())
	}
}

impl PartialEq for Node<'_> {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.tree, other.tree) && self.id == other.id
	}
}

impl Eq for Node<'_> {}

impl std::fmt::Debug for Node<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Node")
			.field("id", &self.id.0)
			.field("name", &self.name())
			.field("content", &self.content())
			.field("line", &self.line())
			.field("children", &self.child_count())
			.finish()
	}
}

fn split_args(content: &str) -> Vec<&str> {
	let mut args = Vec::new();
	let mut rest = content.trim_start();

	while !rest.is_empty() {
		if let Some(quoted) = rest.strip_prefix('"') {
			let end = quoted.find('"').unwrap_or(quoted.len());
			args.push(&quoted[..end]);
			rest = quoted.get(end + 1..).unwrap_or("");
		} else {
			let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
			args.push(&rest[..end]);
			rest = &rest[end..];
		}
		rest = rest.trim_start();
	}

	args
}
