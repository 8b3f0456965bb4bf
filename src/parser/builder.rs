use crate::config::types::{ParseOptions, UnclosedSections, UnmatchedClose};
use crate::error::{ParseError, Result};
use crate::parser::classifier::{LineKind, classify};
use crate::tree::node::{ConfigTree, NodeId, NodeKind};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse configuration text from a reader with default options.
pub fn parse<R: BufRead>(reader: R) -> Result<ConfigTree> {
	parse_with(reader, &ParseOptions::default())
}

/// Parse configuration text from a reader.
///
/// Lines are split on `\n` and decoded lossily, so stray non-UTF-8 bytes
/// (Latin-1 comments in older files) never abort the parse. Only real I/O
/// failures surface as `ParseError::SourceRead`.
pub fn parse_with<R: BufRead>(reader: R, options: &ParseOptions) -> Result<ConfigTree> {
	let lines = reader.split(b'\n').map(|bytes| bytes.map(decode_line));
	parse_lines(lines, options)
}

/// Decode one raw line, dropping a trailing `\r`.
fn decode_line(mut bytes: Vec<u8>) -> String {
	if bytes.last() == Some(&b'\r') {
		bytes.pop();
	}
	String::from_utf8(bytes).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Parse configuration held in memory with default options.
pub fn parse_str(content: &str) -> Result<ConfigTree> {
	parse_lines(content.lines().map(|line| Ok(line.to_string())), &ParseOptions::default())
}

/// Open and parse a configuration file.
pub fn parse_file(path: &Path, options: &ParseOptions) -> Result<ConfigTree> {
	let file = File::open(path).map_err(|source| ParseError::FileOpen {
		path: path.to_path_buf(),
		source,
	})?;

	tracing::debug!(path = %path.display(), "parsing config file");
	parse_with(BufReader::new(file), options)
}

/// Parse a stream of lines.
///
/// Each line is classified and applied to the tree in order. Any read or
/// construction error aborts the parse and the partial tree is dropped.
pub fn parse_lines<I>(lines: I, options: &ParseOptions) -> Result<ConfigTree>
where
	I: IntoIterator<Item = std::io::Result<String>>,
{
	let mut builder = Builder::new(options);

	for (index, line) in lines.into_iter().enumerate() {
		let number = index + 1;
		let line = line.map_err(|source| ParseError::SourceRead {
			line: number,
			source,
		})?;
		builder.apply(classify(&line), number)?;
	}

	builder.finish()
}

/// Cursor state for a single parse.
struct Builder<'o> {
	tree: ConfigTree,
	current: NodeId,
	options: &'o ParseOptions,
}

impl<'o> Builder<'o> {
	fn new(options: &'o ParseOptions) -> Self {
		Builder {
			tree: ConfigTree::new(),
			current: NodeId::ROOT,
			options,
		}
	}

	fn apply(&mut self, line_kind: LineKind<'_>, line: usize) -> Result<()> {
		match line_kind {
			LineKind::Comment | LineKind::Unmatched => {}
			LineKind::SectionOpen { name, content } => {
				let kind = NodeKind::Section;
				self.current = self.tree.create_child(self.current, kind, name, content, line)?;
			}
			LineKind::SectionClose { name } => self.close(name, line)?,
			LineKind::Directive { name, content } => {
				let kind = NodeKind::Directive;
				self.tree.create_child(self.current, kind, name, content, line)?;
			}
		}
		Ok(())
	}

	fn close(&mut self, name: &str, line: usize) -> Result<()> {
		let current = self.tree.get(self.current).ok_or(ParseError::NullParent)?;

		let Some(parent) = current.parent() else {
			return match self.options.unmatched_close {
				UnmatchedClose::Error => Err(ParseError::UnmatchedClose {
					line,
					name: name.to_string(),
				}),
				UnmatchedClose::Ignore => {
					tracing::warn!(line, name, "ignoring closing tag with no open section");
					Ok(())
				}
			};
		};

		if current.name() != name {
			tracing::warn!(
				line,
				open = current.name(),
				close = name,
				"closing tag does not match open section"
			);
		}

		self.current = parent.id();
		Ok(())
	}

	fn finish(mut self) -> Result<ConfigTree> {
		if self.options.unclosed_sections == UnclosedSections::Error {
			let open = self.tree.get(self.current).ok_or(ParseError::NullParent)?;
			if !open.is_root() {
				return Err(ParseError::UnclosedSection {
					line: open.line(),
					name: open.name().to_string(),
				});
			}
		}

		tracing::debug!(
			nodes = self.tree.len(),
			cursor = self.current.index(),
			"finished parsing"
		);
		self.tree.set_cursor(self.current);
		Ok(self.tree)
	}
}
