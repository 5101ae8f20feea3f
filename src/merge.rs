//! External to internal conversion
//!
//! `NEA TESTBADGRAM` blocks are never rebuilt: once split, their rules are
//! indistinguishable from the rest of the `.aff` file and stay in the header.

use crate::{
	block::{Block, BlockKind},
	fixture::{ConvertError, ExternalFixture},
	internal::InternalDocument,
	test_case::TestCase,
};

/// Composes a document from the external files. `.aff` becomes the header,
/// the entries of `.dic` a `NEA DIC` block, `.good` and `.wrong` the word
/// blocks. A `.good` without any word yields no block.
#[must_use]
pub fn merge(fixture: ExternalFixture) -> InternalDocument {
	let ExternalFixture {
		aff,
		dic,
		good,
		wrong,
	} = fixture;

	let mut blocks = vec![Block::new(BlockKind::Dic, dic.into_entries())];
	if good.iter().any(|word| !word.trim_ascii().is_empty()) {
		blocks.push(Block::new(BlockKind::TestGoodWords, good));
	}
	if let Some(wrong) = wrong {
		blocks.push(Block::new(BlockKind::TestBadWords, wrong));
	}

	InternalDocument {
		header: aff,
		blocks,
	}
}

/// Reads the external files of `case` and writes its `.neadic` file. Nothing
/// is written unless both `.aff` and `.dic` exist.
///
/// # Errors
///
/// Will error with [`ConvertError::MissingArtifact`] if `.aff` or `.dic` is
/// absent, and if any file can't be read or written.
pub fn merge_files(case: &TestCase) -> Result<InternalDocument, ConvertError> {
	let fixture = ExternalFixture::read(case)?;

	let path = case.internal_path();
	log::info!("merging into {}", path.display());

	let doc = merge(fixture);
	doc.write(&path)?;
	Ok(doc)
}
