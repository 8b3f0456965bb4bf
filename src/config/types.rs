use serde::Deserialize;

/// Options controlling how the tree builder treats unbalanced sections.
///
/// Loaded from a `.httpd-tree.toml` file or built directly. Every field has a
/// default, so an empty file is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ParseOptions {
	/// What to do with a closing tag that has no open section to close.
	#[serde(default)]
	pub unmatched_close: UnmatchedClose,

	/// What to do with sections still open when the input ends.
	#[serde(default)]
	pub unclosed_sections: UnclosedSections,
}

/// Policy for a `</Name>` line seen while the cursor is at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnmatchedClose {
	/// Abort the parse with `ParseError::UnmatchedClose`.
	#[default]
	Error,

	/// Keep the cursor at the root and carry on.
	Ignore,
}

/// Policy for sections left open at end of input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnclosedSections {
	/// Return the tree; its cursor points at the innermost open section.
	#[default]
	Allow,

	/// Abort the parse with `ParseError::UnclosedSection`.
	Error,
}

impl ParseOptions {
	/// Options that accept any nesting: stray closes are ignored and open
	/// sections are left as they are.
	pub fn lenient() -> Self {
		ParseOptions {
			unmatched_close: UnmatchedClose::Ignore,
			unclosed_sections: UnclosedSections::Allow,
		}
	}

	/// Options that reject any unbalanced nesting.
	pub fn strict() -> Self {
		ParseOptions {
			unmatched_close: UnmatchedClose::Error,
			unclosed_sections: UnclosedSections::Error,
		}
	}
}
