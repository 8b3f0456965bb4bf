use std::path::PathBuf;

/// Library-level structured errors for httpd-tree.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
	#[error("Line {line}: node name cannot be empty")]
	EmptyName { line: usize },

	#[error("Line {line}: content of `{name}` cannot be empty")]
	EmptyContent { line: usize, name: String },

	#[error("Parent node does not exist")]
	NullParent,

	#[error("Node is null")]
	NullNode,

	#[error("Failed to read line {line} of config source")]
	SourceRead {
		line: usize,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to open config file: {path}")]
	FileOpen {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Line {line}: closing tag </{name}> has no open section")]
	UnmatchedClose { line: usize, name: String },

	#[error("Line {line}: section <{name}> is never closed")]
	UnclosedSection { line: usize, name: String },

	#[error("Failed to read options file: {path}")]
	OptionsRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse options file: {path}")]
	OptionsParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;
