use crate::tree::node::{ConfigTree, Node};
use std::fmt;

impl fmt::Display for ConfigTree {
	/// Indented listing of every node below the root, one per line.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for child in self.root().children() {
			write_node(f, child, 0)?;
		}
		Ok(())
	}
}

impl fmt::Display for Node<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_root() {
			return write!(f, "{}", self.tree());
		}
		write_node(f, *self, 0)
	}
}

fn write_node(f: &mut fmt::Formatter<'_>, node: Node<'_>, depth: usize) -> fmt::Result {
	let indent = "\t".repeat(depth);
	if !node.is_section() {
		return writeln!(f, "{indent}{} {}", node.name(), node.content());
	}

	writeln!(
		f,
		"{indent}<{} {}> ({} children)",
		node.name(),
		node.content(),
		node.child_count()
	)?;
	for child in node.children() {
		write_node(f, child, depth + 1)?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tree::node::{ConfigTree, NodeId, NodeKind};

	#[test]
	fn test_render_nested_tree() {
		let mut tree = ConfigTree::new();
		tree.create_child(NodeId::ROOT, NodeKind::Directive, "Listen", "80", 1)
			.unwrap();
		let vhost = tree
			.create_child(NodeId::ROOT, NodeKind::Section, "VirtualHost", "*:80", 2)
			.unwrap();
		tree.create_child(vhost, NodeKind::Directive, "ServerName", "www.example.com", 3)
			.unwrap();

		let rendered = tree.to_string();
		assert_eq!(
			rendered,
			"Listen 80\n<VirtualHost *:80> (1 children)\n\tServerName www.example.com\n"
		);
	}

	#[test]
	fn test_render_empty_section_keeps_tag() {
		let mut tree = ConfigTree::new();
		tree.create_child(NodeId::ROOT, NodeKind::Section, "Directory", "/x", 1)
			.unwrap();
		tree.create_child(NodeId::ROOT, NodeKind::Directive, "Listen", "80", 3)
			.unwrap();

		assert_eq!(tree.to_string(), "<Directory /x> (0 children)\nListen 80\n");
	}

	#[test]
	fn test_render_empty_tree() {
		assert_eq!(ConfigTree::new().to_string(), "");
	}
}
