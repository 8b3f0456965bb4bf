//! The parsed configuration tree.
//!
//! This module handles:
//! - Node storage and the single node construction entry point
//! - Borrowed node handles for navigation
//! - Breadth-first lookup by node name
//! - Indented text rendering

pub mod node;
pub mod render;
pub mod search;

pub use node::{ConfigNode, ConfigTree, Node, NodeId, NodeKind};
pub use search::{find_all, find_one, is_root};
