use regex::Regex;
use std::sync::LazyLock;

static COMMENT: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\s*#").expect("comment pattern is valid"));

static SECTION_OPEN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\s*<([^/\s>]+)\s*([^>]*)>").expect("section open pattern is valid")
});

static SECTION_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\s*</([^\s>]+)\s*>").expect("section close pattern is valid")
});

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\s*([^/\s]+)\s+(\S.*?)\s*$").expect("directive pattern is valid")
});

/// What a single configuration line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
	/// `# ...`
	Comment,

	/// `<Name args>`. `content` is empty when the tag has no arguments.
	SectionOpen { name: &'a str, content: &'a str },

	/// `</Name>`
	SectionClose { name: &'a str },

	/// `Name args...`
	Directive { name: &'a str, content: &'a str },

	/// Blank or malformed lines.
	Unmatched,
}

/// Classify one line of configuration text.
///
/// Patterns are tried in order: comment, section open, section close,
/// directive. The first match wins, so `<Directory />` is never read as a
/// directive named `<Directory`.
pub fn classify(line: &str) -> LineKind<'_> {
	if COMMENT.is_match(line) {
		return LineKind::Comment;
	}

	if let Some(caps) = SECTION_OPEN.captures(line) {
		let name = caps.get(1).map_or("", |m| m.as_str());
		let content = caps.get(2).map_or("", |m| m.as_str().trim_end());
		return LineKind::SectionOpen { name, content };
	}

	if let Some(caps) = SECTION_CLOSE.captures(line) {
		let name = caps.get(1).map_or("", |m| m.as_str());
		return LineKind::SectionClose { name };
	}

	if let Some(caps) = DIRECTIVE.captures(line) {
		let name = caps.get(1).map_or("", |m| m.as_str());
		let content = caps.get(2).map_or("", |m| m.as_str());
		return LineKind::Directive { name, content };
	}

	LineKind::Unmatched
}
