//! Turning httpd configuration text into a [`ConfigTree`](crate::tree::ConfigTree).
//!
//! This module handles:
//! - Classifying single lines as comments, section tags, or directives
//! - Building the tree from a stream of lines

pub mod builder;
pub mod classifier;

pub use builder::{parse, parse_file, parse_lines, parse_str, parse_with};
pub use classifier::{LineKind, classify};
