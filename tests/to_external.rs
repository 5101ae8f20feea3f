mod utils;

use neadic_convert::{ConvertError, Mode};

const AFFIX: &str = "\
SET UTF-8
NEA DIC {
    2
    cat
    dog
}
NEA TESTGOODWORDS {
    cat
}
";

#[test]
fn splits_into_aff_dic_and_good() -> Result<(), Box<dyn std::error::Error>> {
	let dir = utils::fixture_dir(&[("affix.neadic", AFFIX)])?;

	utils::batch(dir.path(), Mode::ToExternal).run(&["affix"])?;

	assert_eq!(utils::read(dir.path(), "affix.aff")?.as_deref(), Some("SET UTF-8\n"));
	assert_eq!(utils::read(dir.path(), "affix.dic")?.as_deref(), Some("2\ncat\ndog\n"));
	assert_eq!(utils::read(dir.path(), "affix.good")?.as_deref(), Some("cat\n"));
	assert_eq!(utils::read(dir.path(), "affix.wrong")?, None);

	Ok(())
}

#[test]
fn defaults_for_missing_blocks() -> Result<(), Box<dyn std::error::Error>> {
	let dir = utils::fixture_dir(&[(
		"badgram.neadic",
		"\
# faulty affix rule
NEA TESTBADGRAM {
    SFX A Y 2
    SFX A 0 s .
}
",
	)])?;

	utils::batch(dir.path(), Mode::ToExternal).run(&["tests/badgram.neadic"])?;

	assert_eq!(
		utils::read(dir.path(), "badgram.aff")?.as_deref(),
		Some("# faulty affix rule\nSFX A Y 2\nSFX A 0 s .\n")
	);
	assert_eq!(utils::read(dir.path(), "badgram.dic")?.as_deref(), Some("1\nthssntwd\n"));
	assert_eq!(utils::read(dir.path(), "badgram.good")?.as_deref(), Some("\n"));
	assert_eq!(utils::read(dir.path(), "badgram.wrong")?, None);

	Ok(())
}

#[test]
fn overwrites_and_removes_stale_files() -> Result<(), Box<dyn std::error::Error>> {
	let dir = utils::fixture_dir(&[
		("stale.neadic", "NEA DIC {\n    new\n}\n"),
		("stale.dic", "1\nold\n"),
		("stale.wrong", "old\n"),
	])?;

	utils::batch(dir.path(), Mode::ToExternal).run(&["stale"])?;

	assert_eq!(utils::read(dir.path(), "stale.dic")?.as_deref(), Some("1\nnew\n"));
	assert_eq!(utils::read(dir.path(), "stale.wrong")?, None);

	Ok(())
}

#[test]
fn missing_neadic_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
	let dir = utils::fixture_dir::<&str>(&[])?;

	let res = utils::batch(dir.path(), Mode::ToExternal).run(&["nothing"]);

	assert!(matches!(res, Err(ConvertError::MissingArtifact { .. })));
	assert_eq!(utils::read(dir.path(), "nothing.aff")?, None);

	Ok(())
}

#[test]
fn latin1_document_splits_byte_for_byte() -> Result<(), Box<dyn std::error::Error>> {
	let source: &[u8] = b"\
SET ISO8859-1
TRY \xe9\xe8a
NEA DIC {
    caf\xe9/S
    \xe9t\xe9
}
NEA TESTGOODWORDS {
    caf\xe9s
}
NEA TESTBADWORDS {
    cafe\xe9
}
";
	let dir = utils::fixture_dir(&[("latin.neadic", source)])?;

	utils::batch(dir.path(), Mode::ToExternal).run(&["latin"])?;

	let read = |name: &str| utils::read_bytes(dir.path(), name);
	assert_eq!(read("latin.aff")?.as_deref(), Some(&b"SET ISO8859-1\nTRY \xe9\xe8a\n"[..]));
	assert_eq!(read("latin.dic")?.as_deref(), Some(&b"2\ncaf\xe9/S\n\xe9t\xe9\n"[..]));
	assert_eq!(read("latin.good")?.as_deref(), Some(&b"caf\xe9s\n"[..]));
	assert_eq!(read("latin.wrong")?.as_deref(), Some(&b"cafe\xe9\n"[..]));

	Ok(())
}

#[test]
fn byte_order_mark_before_first_block() -> Result<(), Box<dyn std::error::Error>> {
	let dir = utils::fixture_dir(&[(
		"bom.neadic",
		&b"\xef\xbb\xbfNEA DIC {\n    foo\n}\nNEA TESTGOODWORDS {\n    foo\n}\n"[..],
	)])?;

	utils::batch(dir.path(), Mode::ToExternal).run(&["bom"])?;

	assert_eq!(utils::read_bytes(dir.path(), "bom.aff")?.as_deref(), Some(&b""[..]));
	assert_eq!(utils::read(dir.path(), "bom.dic")?.as_deref(), Some("1\nfoo\n"));
	assert_eq!(utils::read(dir.path(), "bom.good")?.as_deref(), Some("foo\n"));

	Ok(())
}
