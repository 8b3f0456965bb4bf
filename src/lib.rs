//! httpd-tree - parse Apache httpd-style configuration files into a tree.
//!
//! This library provides:
//! - A line classifier for comments, section tags, and directives
//! - A single-pass tree builder with configurable handling of unbalanced sections
//! - Breadth-first lookup of nodes by name
//!
//! # Example
//!
//! ```
//! use httpd_tree::parse_str;
//!
//! let tree = parse_str(
//!     "Listen 80\n<VirtualHost 172.20.30.40:4000>\nServerAdmin name@email.corporation.com\n</VirtualHost>\n",
//! )
//! .unwrap();
//!
//! let vhost = tree.find_one("VirtualHost").unwrap();
//! assert_eq!(vhost.content(), "172.20.30.40:4000");
//! assert_eq!(vhost.find_all("ServerAdmin").len(), 1);
//! assert!(tree.root().is_root());
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod tree;

pub use config::ParseOptions;
pub use error::{ParseError, Result};
pub use parser::{parse, parse_file, parse_lines, parse_str, parse_with};
pub use tree::{ConfigNode, ConfigTree, Node, NodeId, NodeKind, find_all, find_one, is_root};
