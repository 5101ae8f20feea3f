//! neadic-convert
//!
//! Converts spell-checker test fixtures between the single `.neadic` file and
//! the four Hunspell test files `.aff`, `.dic`, `.good` and `.wrong`.

mod batch;
mod block;
mod dic;
mod fixture;
mod internal;
mod line;
mod merge;
mod split;
mod test_case;

pub use batch::{Batch, Config, Mode};
pub use block::{split_blocks, Block, BlockKind, RawBlock};
pub use dic::{DicFile, SENTINEL_ENTRY};
pub use fixture::{ConvertError, ExternalFixture};
pub use internal::InternalDocument;
pub use line::Line;
pub use merge::{merge, merge_files};
pub use split::{split, split_file};
pub use test_case::{TestCase, EXT_AFF, EXT_DIC, EXT_GOOD, EXT_NEADIC, EXT_WRONG};
