//! Runs conversions and test commands over a list of test cases

use crate::{
	fixture::ConvertError,
	merge::merge_files,
	split::split_file,
	test_case::TestCase,
};
use std::{
	path::{Path, PathBuf},
	process::Command,
};

/// Direction of the conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
	/// External files into a `.neadic` file
	ToInternal,
	/// A `.neadic` file into external files
	ToExternal,
	/// Only run the test commands
	#[default]
	None,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
	pub mode: Mode,
	/// Run with the `.neadic` path as its last argument
	pub internal_test_command: Option<String>,
	/// Run with the `.dic` path as its last argument
	pub external_test_command: Option<String>,
	/// Where `.neadic` files live, the current directory by default
	pub internal_dir: Option<PathBuf>,
	/// Where external files live, `internal_dir` by default
	pub external_dir: Option<PathBuf>,
}

pub struct Batch {
	config: Config,
}

impl Batch {
	#[must_use]
	pub const fn new(config: Config) -> Self {
		Self { config }
	}

	#[must_use]
	pub fn resolve(&self, name: &str) -> TestCase {
		TestCase::resolve(
			name,
			self.config.internal_dir.as_deref(),
			self.config.external_dir.as_deref(),
		)
	}

	/// Handles each name in order, stopping at the first failure.
	///
	/// # Errors
	///
	/// Will error as soon as one test case fails to convert or a test command
	/// can't be started. Later names are left untouched.
	pub fn run<S: AsRef<str>>(&self, names: &[S]) -> Result<(), ConvertError> {
		for name in names {
			self.run_one(name.as_ref())?;
		}
		Ok(())
	}

	/// # Errors
	///
	/// See [`Batch::run`].
	pub fn run_one(&self, name: &str) -> Result<(), ConvertError> {
		let case = self.resolve(name);
		log::debug!("test case `{}` from `{name}`", case.basename());

		match self.config.mode {
			Mode::ToInternal => {
				merge_files(&case)?;
			}
			Mode::ToExternal => {
				split_file(&case)?;
			}
			Mode::None => {}
		}

		if let Some(command) = &self.config.internal_test_command {
			run_test_command(command, &case.internal_path())?;
		}
		if let Some(command) = &self.config.external_test_command {
			run_test_command(command, &case.dic_path())?;
		}

		Ok(())
	}
}

/// Runs `command` with `path` appended, after printing a trace line. The
/// command's own result is only logged.
fn run_test_command(command: &str, path: &Path) -> Result<(), ConvertError> {
	let mut words = command.split_whitespace();
	let Some(program) = words.next() else {
		log::debug!("empty test command, skipping {}", path.display());
		return Ok(());
	};

	println!("{command} {}", path.display());

	let status = Command::new(program)
		.args(words)
		.arg(path)
		.status()
		.map_err(|source| ConvertError::TestCommand {
			command: command.to_owned(),
			source,
		})?;
	log::debug!("`{command}` exited with {status}");

	Ok(())
}
