use neadic_convert::{Batch, Config, Mode};
use std::{fs, io, path::Path};
use tempfile::TempDir;

/// Writes `files`, pairs of file name and content, into a fresh directory
pub(crate) fn fixture_dir<C: AsRef<[u8]>>(files: &[(&str, C)]) -> io::Result<TempDir> {
	let dir = tempfile::tempdir()?;
	for (name, content) in files {
		fs::write(dir.path().join(name), content.as_ref())?;
	}
	Ok(dir)
}

/// Batch converting in `mode` inside `dir`
#[allow(dead_code)]
pub(crate) fn batch(dir: &Path, mode: Mode) -> Batch {
	Batch::new(Config {
		mode,
		internal_dir: Some(dir.to_path_buf()),
		..Config::default()
	})
}

/// Content of `name` in `dir`, [`None`] if it doesn't exist
#[allow(dead_code)]
pub(crate) fn read(dir: &Path, name: &str) -> io::Result<Option<String>> {
	match fs::read_to_string(dir.join(name)) {
		Ok(content) => Ok(Some(content)),
		Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
		Err(err) => Err(err),
	}
}

/// Raw content of `name` in `dir`, for fixtures that aren't UTF-8
#[allow(dead_code)]
pub(crate) fn read_bytes(dir: &Path, name: &str) -> io::Result<Option<Vec<u8>>> {
	match fs::read(dir.join(name)) {
		Ok(content) => Ok(Some(content)),
		Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
		Err(err) => Err(err),
	}
}
