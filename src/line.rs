//! Lines as raw bytes
//!
//! Fixtures come in whatever charset their `SET` names, so nothing here ever
//! decodes them. Lines are split on `\n`, a `\r` before it is dropped.

/// One line, without its terminator
pub type Line = Vec<u8>;

/// UTF-8 byte order mark
const BOM: &[u8] = b"\xef\xbb\xbf";

/// Splits `content` into lines. A final newline doesn't open an extra empty
/// line, but an empty content has no line at all.
pub(crate) fn split_lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
	let body = content.strip_suffix(b"\n").unwrap_or(content);
	(!content.is_empty())
		.then(|| body.split(|b| *b == b'\n'))
		.into_iter()
		.flatten()
		.map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

/// Every line terminated by a newline
pub(crate) fn join_lines(lines: &[Line]) -> Vec<u8> {
	lines.iter().fold(Vec::new(), |mut acc, line| {
		acc.extend_from_slice(line);
		acc.push(b'\n');
		acc
	})
}

pub(crate) fn to_lines(content: &[u8]) -> Vec<Line> {
	split_lines(content).map(<[u8]>::to_vec).collect()
}

/// `line` without a leading byte order mark
pub(crate) fn strip_bom(line: &[u8]) -> &[u8] {
	line.strip_prefix(BOM).unwrap_or(line)
}

/// Printable form of a line for diagnostics
pub(crate) fn show(line: &[u8]) -> String {
	line.escape_ascii().to_string()
}

/// Lines as text, for assertions on ASCII fixtures
#[cfg(test)]
pub(crate) fn text(lines: &[Line]) -> Vec<&str> {
	lines
		.iter()
		.map(|line| std::str::from_utf8(line).unwrap())
		.collect()
}
