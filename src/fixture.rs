//! The external form of a test case, four files sharing one basename
//!
//! Entrypoint methods are
//! - [`ExternalFixture::read`]: loads the files of a [`TestCase`]
//! - [`ExternalFixture::write`]: stores them back, overwriting existing ones

use crate::{
	dic::DicFile,
	line::{join_lines, to_lines, Line},
	test_case::TestCase,
};
use std::{
	fs, io,
	path::{Path, PathBuf},
};

/// Ways converting a test case could go wrong
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
	/// A file the conversion can't do without is absent
	#[error("Missing required file: {}", .path.display())]
	MissingArtifact { path: PathBuf },

	/// A test command could not be started
	#[error("Could not run test command `{command}`: {source}")]
	TestCommand { command: String, source: io::Error },

	/// Could not correctly read or write given files
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// `.aff`, `.dic`, `.good` and `.wrong` contents, kept as raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalFixture {
	/// Affix rules, opaque to the converter
	pub aff: Vec<Line>,
	pub dic: DicFile,
	/// Words expected to pass
	pub good: Vec<Line>,
	/// Words expected to fail, [`None`] when the fixture makes no such assertion
	pub wrong: Option<Vec<Line>>,
}

impl ExternalFixture {
	/// Reads every file of `case`. Nothing is returned unless both `.aff` and
	/// `.dic` exist, `.good` and `.wrong` are optional.
	///
	/// # Errors
	///
	/// Will error with [`ConvertError::MissingArtifact`] if `.aff` or `.dic`
	/// is absent, and on any other failure to read the files.
	pub fn read(case: &TestCase) -> Result<Self, ConvertError> {
		let aff = read_required(&case.aff_path())?;
		let dic = read_required(&case.dic_path())?;
		let good = read_optional(&case.good_path())?;
		let wrong = read_optional(&case.wrong_path())?;

		Ok(Self {
			aff: to_lines(&aff),
			dic: DicFile::parse(&dic),
			good: good.as_deref().map(to_lines).unwrap_or_default(),
			wrong: wrong.as_deref().map(to_lines),
		})
	}

	/// Writes every file of `case`. Without bad words, a `.wrong` left over by
	/// an earlier conversion is removed.
	///
	/// # Errors
	///
	/// Will error if any of the files can't be written or removed.
	pub fn write(&self, case: &TestCase) -> Result<(), ConvertError> {
		fs::write(case.aff_path(), join_lines(&self.aff))?;
		fs::write(case.dic_path(), self.dic.to_bytes())?;
		fs::write(case.good_path(), join_lines(&self.good))?;

		let wrong_path = case.wrong_path();
		match &self.wrong {
			Some(wrong) => fs::write(&wrong_path, join_lines(wrong))?,
			None => match fs::remove_file(&wrong_path) {
				Ok(()) => log::debug!("removed stale {}", wrong_path.display()),
				Err(err) if err.kind() == io::ErrorKind::NotFound => {}
				Err(err) => return Err(err.into()),
			},
		}

		Ok(())
	}
}

/// # Errors
///
/// Will error with [`ConvertError::MissingArtifact`] if `path` doesn't exist.
pub(crate) fn read_required(path: &Path) -> Result<Vec<u8>, ConvertError> {
	read_optional(path)?.ok_or_else(|| ConvertError::MissingArtifact {
		path: path.to_path_buf(),
	})
}

fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, ConvertError> {
	match fs::read(path) {
		Ok(content) => {
			log::debug!("read {}", path.display());
			Ok(Some(content))
		}
		Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
		Err(err) => Err(err.into()),
	}
}
