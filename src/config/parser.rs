use crate::config::types::ParseOptions;
use crate::error::{ParseError, Result};
use std::path::Path;

/// Parse an options file from the given path.
pub fn parse_options_file(path: &Path) -> Result<ParseOptions> {
	let content = std::fs::read_to_string(path).map_err(|source| ParseError::OptionsRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_options_str(&content, path)
}

/// Parse options from a string (useful for testing).
pub fn parse_options_str(content: &str, path: &Path) -> Result<ParseOptions> {
	toml::from_str(content).map_err(|source| ParseError::OptionsParse {
		path: path.to_path_buf(),
		source,
	})
}
