//! Internal to external conversion

use crate::{
	block::BlockKind,
	dic::DicFile,
	fixture::{ConvertError, ExternalFixture},
	internal::InternalDocument,
	line::Line,
	test_case::TestCase,
};

/// Projects `doc` on the four external files.
///
/// Missing optional blocks get defaults: a dictionary holding only
/// [`SENTINEL_ENTRY`](crate::dic::SENTINEL_ENTRY), a `.good` made of one empty
/// line. `.wrong` exists only when the document has bad words.
#[must_use]
pub fn split(doc: &InternalDocument) -> ExternalFixture {
	let mut aff = doc.header.clone();
	let mut dic = None;
	let mut good = None;
	let mut wrong = None;

	for block in &doc.blocks {
		let body = block.body.clone();
		let previous = match block.kind {
			Some(BlockKind::TestBadGram) => {
				aff.extend(body);
				continue;
			}
			Some(BlockKind::Dic) => dic.replace(DicFile::from_block(body)).is_some(),
			Some(BlockKind::TestGoodWords) => good.replace(body).is_some(),
			Some(BlockKind::TestBadWords) => wrong.replace(body).is_some(),
			None => {
				log::warn!("line {}: dropping block of unknown kind", block.line_no);
				continue;
			}
		};

		if previous {
			log::warn!(
				"line {}: block replaces an earlier one of the same kind",
				block.line_no
			);
		}
	}

	ExternalFixture {
		aff,
		dic: dic.unwrap_or_else(DicFile::sentinel),
		good: good.unwrap_or_else(|| vec![Line::new()]),
		wrong,
	}
}

/// Reads the `.neadic` file of `case` and writes its external files.
///
/// # Errors
///
/// Will error if the `.neadic` file is missing or if any file can't be read
/// or written.
pub fn split_file(case: &TestCase) -> Result<ExternalFixture, ConvertError> {
	let path = case.internal_path();
	log::info!("splitting {}", path.display());

	let fixture = split(&InternalDocument::file(&path)?);
	fixture.write(case)?;
	Ok(fixture)
}
