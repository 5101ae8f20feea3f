//! The `.dic` artifact: a count line followed by that many entries

use crate::line::{show, split_lines, Line};
use nom::{
	character::complete::{space0, u64 as u64_p},
	IResult, Parser,
};
use nom_supreme::ParserExt;
use std::io;

/// Entry used when a fixture has no dictionary, never a valid word in any
/// supported language
pub const SENTINEL_ENTRY: &str = "thssntwd";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DicFile {
	entries: Vec<Line>,
}

impl DicFile {
	#[must_use]
	pub const fn new(entries: Vec<Line>) -> Self {
		Self { entries }
	}

	/// Dictionary holding only [`SENTINEL_ENTRY`]
	#[must_use]
	pub fn sentinel() -> Self {
		Self::new(vec![SENTINEL_ENTRY.as_bytes().to_vec()])
	}

	/// Reads a `.dic` content. The count line is discarded, entries are every
	/// following line. A count that doesn't match the entries is only reported.
	#[must_use]
	pub fn parse(content: &[u8]) -> Self {
		let mut lines = split_lines(content);
		let count_line = lines.next();
		let entries: Vec<Line> = lines.map(<[u8]>::to_vec).collect();

		match count_line {
			None => log::warn!("dictionary is empty, its count line is missing"),
			Some(line) => match parse_count(line) {
				None => log::warn!("dictionary count line is not a number: {}", show(line)),
				Some(count) if usize::try_from(count).ok() != Some(entries.len()) => log::warn!(
					"dictionary announces {count} entries but holds {}",
					entries.len()
				),
				Some(_) => {}
			},
		}

		Self { entries }
	}

	/// Builds the dictionary from a `NEA DIC` body. A first line holding only a
	/// number is taken as a count line and dropped, the count is recomputed.
	///
	/// A dictionary can't start with a purely numeric entry: it would be read
	/// as the count line.
	#[must_use]
	pub fn from_block(mut body: Vec<Line>) -> Self {
		if let Some(count) = body.first().and_then(|line| parse_count(line)) {
			body.remove(0);
			if usize::try_from(count).ok() != Some(body.len()) {
				log::warn!(
					"dictionary block announces {count} entries but holds {}",
					body.len()
				);
			}
		}

		Self { entries: body }
	}

	#[must_use]
	pub fn entries(&self) -> &[Line] {
		&self.entries
	}

	#[must_use]
	pub fn into_entries(self) -> Vec<Line> {
		self.entries
	}

	/// Writes the count line, always equal to the number of entries, then
	/// every entry
	///
	/// # Errors
	///
	/// Will error if `out` fails to be written to.
	pub fn write_to(&self, out: &mut impl io::Write) -> io::Result<()> {
		writeln!(out, "{}", self.entries.len())?;
		for entry in &self.entries {
			out.write_all(entry)?;
			out.write_all(b"\n")?;
		}
		Ok(())
	}

	#[must_use]
	pub fn to_bytes(&self) -> Vec<u8> {
		let mut out = Vec::new();
		// writing to a `Vec` can't fail
		let _ = self.write_to(&mut out);
		out
	}
}

fn parse_count(line: &[u8]) -> Option<u64> {
	let res: IResult<&[u8], u64> = space0
		.precedes(u64_p)
		.terminated(space0)
		.all_consuming()
		.parse(line);
	res.map(|(_, count)| count).ok()
}
