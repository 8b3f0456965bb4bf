use crate::config::parser::parse_options_file;
use crate::config::types::ParseOptions;
use crate::error::{ParseError, Result};
use std::path::{Path, PathBuf};

const OPTIONS_FILE_NAME: &str = ".httpd-tree.toml";

/// Resolve the parse options to use.
///
/// The lookup order is:
/// 1. An explicit path, which must exist and parse
/// 2. `~/.httpd-tree.toml`, if present
/// 3. `ParseOptions::default()`
pub fn load_options(explicit: Option<&Path>) -> Result<ParseOptions> {
	if let Some(path) = explicit {
		tracing::debug!(path = %path.display(), "loading options file");
		return parse_options_file(path);
	}

	// A missing home directory just means there is no user file to read.
	let Ok(user_path) = user_options_path() else {
		return Ok(ParseOptions::default());
	};

	if user_path.exists() {
		tracing::debug!(path = %user_path.display(), "loading user options file");
		parse_options_file(&user_path)
	} else {
		Ok(ParseOptions::default())
	}
}

/// Get the path to the user's options file.
pub fn user_options_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(ParseError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(OPTIONS_FILE_NAME))
}
