//! Text decoding and line handling shared by both pipeline stages.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Decode bytes as UTF-8, dropping invalid sequences.
pub fn decode_permissive(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Read a text file permissively.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_permissive(&bytes))
}

/// Line boundaries besides `\r\n`: LF, CR, VT, FF, FS, GS, RS, NEL, LS, PS.
const LINE_TERMINATORS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split on any line terminator, treating `\r\n` as one. A trailing
/// terminator does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(LINE_TERMINATORS) {
            Some(idx) => {
                lines.push(&rest[..idx]);
                let skip = if rest[idx..].starts_with("\r\n") {
                    2
                } else {
                    rest[idx..].chars().next().map_or(1, char::len_utf8)
                };
                rest = &rest[idx + skip..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}

/// Write lines joined by `\n`, without a trailing newline.
pub fn write_lines<W: Write, S: AsRef<str>>(sink: &mut W, lines: &[S]) -> Result<()> {
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            sink.write_all(b"\n")?;
        }
        sink.write_all(line.as_ref().as_bytes())?;
    }
    sink.flush()?;
    Ok(())
}
