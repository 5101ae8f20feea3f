//! Typed blocks of a `.neadic` document
//!
//! ```neadic
//! NEA DIC {
//!     hello
//!     # comments are never payload
//! }
//! ```
//!
//! A block opens with a line starting with `NEA` at column zero. Payload lines
//! are indented by [`INDENT`] and the block closes on a line holding only `}`.

use crate::line::{show, split_lines, strip_bom, Line};
use nom::{
	branch::alt,
	bytes::complete::{is_not, tag},
	character::complete::{space0, space1},
	combinator::eof,
	IResult, Parser,
};
use nom_supreme::ParserExt;
use regex::bytes::Regex;
use std::{fmt, io, str::FromStr, sync::LazyLock};

/// Keyword opening every block
pub(crate) const MARKER: &str = "NEA";
/// Indentation of payload lines
pub(crate) const INDENT: &[u8] = b"    ";
/// Comment marker, a line starting with it is never payload
const COMMENT: u8 = b'#';

/// `}`, optionally indented or followed by a comment, in any charset
#[allow(clippy::unwrap_used)]
static CLOSING: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?-u)^\s*\}\s*(#.*)?$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
	/// `NEA DIC`, dictionary entries
	Dic,
	/// `NEA TESTBADGRAM`, affix rules expected to be reported as faulty
	TestBadGram,
	/// `NEA TESTGOODWORDS`, words expected to pass
	TestGoodWords,
	/// `NEA TESTBADWORDS`, words expected to fail
	TestBadWords,
}

impl FromStr for BlockKind {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"DIC" => Ok(Self::Dic),
			"TESTBADGRAM" => Ok(Self::TestBadGram),
			"TESTGOODWORDS" => Ok(Self::TestGoodWords),
			"TESTBADWORDS" => Ok(Self::TestBadWords),

			_ => Err(()),
		}
	}
}

impl fmt::Display for BlockKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Dic => write!(f, "DIC"),
			Self::TestBadGram => write!(f, "TESTBADGRAM"),
			Self::TestGoodWords => write!(f, "TESTGOODWORDS"),
			Self::TestBadWords => write!(f, "TESTBADWORDS"),
		}
	}
}

/// A block with its framing removed.
///
/// `kind` is [`None`] when the opening line names no known kind, such blocks
/// are kept so the splitter can report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
	pub kind: Option<BlockKind>,
	pub body: Vec<Line>,
	/// 1-based line number of the opening line, `0` for built blocks
	pub line_no: usize,
}

impl Block {
	/// Builds a block around `body`, as the merger does
	#[must_use]
	pub fn new(kind: BlockKind, body: Vec<Line>) -> Self {
		Self {
			kind: Some(kind),
			body,
			line_no: 0,
		}
	}

	/// Writes the block framing back, the exact reverse of
	/// [`RawBlock::classify`]. Unclassified blocks write nothing.
	///
	/// # Errors
	///
	/// Will error if `out` fails to be written to.
	pub fn write_to(&self, out: &mut impl io::Write) -> io::Result<()> {
		let Some(kind) = self.kind else {
			return Ok(());
		};

		writeln!(out, "{MARKER} {kind} {{")?;
		for line in &self.body {
			out.write_all(INDENT)?;
			out.write_all(line)?;
			out.write_all(b"\n")?;
		}
		writeln!(out, "}}")
	}

	#[must_use]
	pub fn to_bytes(&self) -> Vec<u8> {
		let mut out = Vec::new();
		// writing to a `Vec` can't fail
		let _ = self.write_to(&mut out);
		out
	}
}

/// Lines of a block as they appear in the document, opening line included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock<'a> {
	pub(crate) lines: Vec<&'a [u8]>,
	pub(crate) line_no: usize,
}

impl<'a> RawBlock<'a> {
	/// Opening line, carrying the kind
	#[must_use]
	pub fn opening(&self) -> &'a [u8] {
		self.lines.first().copied().unwrap_or_default()
	}

	/// Finds the kind and strips the framing from the payload.
	///
	/// The payload ends at the first closing delimiter. Comment lines are
	/// dropped and up to [`INDENT`] leading spaces are removed from the others.
	#[must_use]
	pub fn classify(&self) -> Block {
		let (kind, has_brace) = match parse_opening(self.opening()) {
			Ok((_, (token, brace))) => (
				token
					.and_then(|t| std::str::from_utf8(t).ok())
					.and_then(|t| t.parse::<BlockKind>().ok()),
				brace.is_some(),
			),
			Err(_) => (None, false),
		};

		if kind.is_some() && !has_brace {
			log::warn!(
				"line {}: expected `{{` after `{}`",
				self.line_no,
				show(self.opening().trim_ascii_end())
			);
		}

		let mut lines = self.lines.iter().enumerate().skip(1);
		let mut body = Vec::new();
		for (_, line) in lines.by_ref() {
			if CLOSING.is_match(line) {
				break;
			}
			if is_comment(line) {
				continue;
			}
			body.push(unindent(line).to_vec());
		}

		for (offset, line) in lines {
			if !line.trim_ascii().is_empty() && !is_comment(line) {
				log::warn!(
					"line {}: ignoring text after the end of the block: {}",
					self.line_no + offset,
					show(line.trim_ascii())
				);
			}
		}

		Block {
			kind,
			body,
			line_no: self.line_no,
		}
	}
}

/// Whether `line` opens a block
pub(crate) fn is_marker(line: &[u8]) -> bool {
	marker(line).is_ok()
}

/// Splits a document into its header and the blocks following it.
///
/// Every line before the first marker belongs to the header, each block spans
/// from its marker to the line before the next one. A byte order mark is
/// ignored in front of a marker on the first line, anywhere else it is kept.
#[must_use]
pub fn split_blocks(text: &[u8]) -> (Vec<&[u8]>, Vec<RawBlock<'_>>) {
	let mut header = Vec::new();
	let mut blocks: Vec<RawBlock<'_>> = Vec::new();

	for (index, line) in split_lines(text).enumerate() {
		let line = if index == 0 && is_marker(strip_bom(line)) {
			strip_bom(line)
		} else {
			line
		};

		if is_marker(line) {
			blocks.push(RawBlock {
				lines: vec![line],
				line_no: index + 1,
			});
		} else if let Some(current) = blocks.last_mut() {
			current.lines.push(line);
		} else {
			header.push(line);
		}
	}

	(header, blocks)
}

fn marker(i: &[u8]) -> IResult<&[u8], &[u8]> {
	tag(MARKER).terminated(alt((space1, eof))).parse(i)
}

/// `NEA KIND {`, both the kind token and the brace being optional
fn parse_opening(i: &[u8]) -> IResult<&[u8], (Option<&[u8]>, Option<&[u8]>)> {
	marker
		.precedes(is_not(" \t{").opt())
		.and(space0.precedes(tag("{")).opt())
		.parse(i)
}

fn is_comment(line: &[u8]) -> bool {
	line.trim_ascii_start().first() == Some(&COMMENT)
}

fn unindent(line: &[u8]) -> &[u8] {
	let spaces = line
		.iter()
		.take(INDENT.len())
		.take_while(|b| **b == b' ')
		.count();
	&line[spaces..]
}
