//! Resolution of a test-case name to the files it owns

use std::path::{Path, PathBuf};

/// Extension of the single-file internal form
pub const EXT_NEADIC: &str = "neadic";
/// Extension of the affix rules file
pub const EXT_AFF: &str = "aff";
/// Extension of the dictionary file
pub const EXT_DIC: &str = "dic";
/// Extension of the words expected to pass
pub const EXT_GOOD: &str = "good";
/// Extension of the words expected to fail
pub const EXT_WRONG: &str = "wrong";

/// One test fixture, known by its basename.
///
/// Both forms are derived from the basename: `<internal_dir>/<basename>.neadic`
/// for the internal one and `<external_dir>/<basename>.{aff,dic,good,wrong}`
/// for the external one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
	basename: String,
	internal_dir: PathBuf,
	external_dir: PathBuf,
}

impl TestCase {
	/// Resolves a user supplied name such as `tests/affix1.neadic`, `affix1.aff`
	/// or `affix1`. The directory and everything from the first dot of the
	/// file name on are discarded.
	///
	/// `external_dir` defaults to `internal_dir`, which defaults to the
	/// current directory.
	#[must_use]
	pub fn resolve(name: &str, internal_dir: Option<&Path>, external_dir: Option<&Path>) -> Self {
		let file_name = Path::new(name)
			.file_name()
			.and_then(|n| n.to_str())
			.unwrap_or(name);
		let basename = file_name
			.split('.')
			.next()
			.unwrap_or(file_name)
			.to_owned();

		let internal_dir = internal_dir.map_or_else(PathBuf::new, Path::to_path_buf);
		let external_dir = external_dir.map_or_else(|| internal_dir.clone(), Path::to_path_buf);

		Self {
			basename,
			internal_dir,
			external_dir,
		}
	}

	#[must_use]
	pub fn basename(&self) -> &str {
		&self.basename
	}

	/// Path of the `.neadic` file
	#[must_use]
	pub fn internal_path(&self) -> PathBuf {
		self.internal_dir
			.join(&self.basename)
			.with_extension(EXT_NEADIC)
	}

	/// Path of one of the external files, `ext` being one of [`EXT_AFF`],
	/// [`EXT_DIC`], [`EXT_GOOD`] or [`EXT_WRONG`]
	#[must_use]
	pub fn external_path(&self, ext: &str) -> PathBuf {
		self.external_dir.join(&self.basename).with_extension(ext)
	}

	#[must_use]
	pub fn aff_path(&self) -> PathBuf {
		self.external_path(EXT_AFF)
	}

	#[must_use]
	pub fn dic_path(&self) -> PathBuf {
		self.external_path(EXT_DIC)
	}

	#[must_use]
	pub fn good_path(&self) -> PathBuf {
		self.external_path(EXT_GOOD)
	}

	#[must_use]
	pub fn wrong_path(&self) -> PathBuf {
		self.external_path(EXT_WRONG)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn discards_directory_and_extension() {
		macro_rules! test {
			($name:literal => $basename:literal) => {{
				let case = TestCase::resolve($name, None, None);
				assert_eq!(case.basename(), $basename);
			}};
		}

		test!("affix1" => "affix1");
		test!("affix1.neadic" => "affix1");
		test!("tests/affix1.neadic" => "affix1");
		test!("../dict/de_CH.aff" => "de_CH");
		test!("some/dir/base.tar.gz" => "base");
	}

	#[test]
	fn derives_paths_in_the_same_directory_by_default() {
		let case = TestCase::resolve("tests/alias.neadic", Some(Path::new("fixtures")), None);

		assert_eq!(case.internal_path(), Path::new("fixtures/alias.neadic"));
		assert_eq!(case.aff_path(), Path::new("fixtures/alias.aff"));
		assert_eq!(case.dic_path(), Path::new("fixtures/alias.dic"));
		assert_eq!(case.good_path(), Path::new("fixtures/alias.good"));
		assert_eq!(case.wrong_path(), Path::new("fixtures/alias.wrong"));
	}

	#[test]
	fn external_dir_only_moves_external_files() {
		let case = TestCase::resolve("alias", None, Some(Path::new("hunspell")));

		assert_eq!(case.internal_path(), Path::new("alias.neadic"));
		assert_eq!(case.dic_path(), Path::new("hunspell/alias.dic"));
	}
}
