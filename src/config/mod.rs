//! Parse options for httpd-tree.
//!
//! This module handles:
//! - The `ParseOptions` policy knobs for malformed section nesting
//! - TOML options file parsing
//! - User options file discovery

pub mod discovery;
pub mod parser;
pub mod types;

pub use discovery::{load_options, user_options_path};
pub use parser::{parse_options_file, parse_options_str};
pub use types::{ParseOptions, UnclosedSections, UnmatchedClose};
