//! The single-file `.neadic` form of a test case

use crate::{
	block::{split_blocks, Block},
	fixture::{read_required, ConvertError},
	line::{join_lines, Line},
};
use std::{fs, io, path::Path};

/// Header lines followed by typed blocks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternalDocument {
	/// Affix rules preceding the first block
	pub header: Vec<Line>,
	pub blocks: Vec<Block>,
}

impl InternalDocument {
	/// Parses a document in any charset, only the structural lines need to be
	/// ASCII
	#[must_use]
	pub fn parse(text: &[u8]) -> Self {
		let (header, blocks) = split_blocks(text);

		Self {
			header: header.into_iter().map(<[u8]>::to_vec).collect(),
			blocks: blocks.iter().map(|b| b.classify()).collect(),
		}
	}

	/// # Errors
	///
	/// Will error with [`ConvertError::MissingArtifact`] if there is no file at
	/// `path`, or if it can't be read.
	pub fn file(path: &Path) -> Result<Self, ConvertError> {
		Ok(Self::parse(&read_required(path)?))
	}

	/// # Errors
	///
	/// Will error if `out` fails to be written to.
	pub fn write_to(&self, out: &mut impl io::Write) -> io::Result<()> {
		out.write_all(&join_lines(&self.header))?;
		for block in &self.blocks {
			block.write_to(out)?;
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

	/// # Errors
	///
	/// Will error if the file can't be written.
	pub fn write(&self, path: &Path) -> Result<(), ConvertError> {
		fs::write(path, self.to_bytes())?;
		Ok(())
	}
}
