use std::fs;
use std::io;
use std::path::Path;

use encoding_rs::WINDOWS_1252;

use crate::error::{Result, ScanError};

/// Reads the whole file as UTF-8. With `lossy`, bytes that are not valid
/// UTF-8 are decoded as Windows-1252 instead of failing.
pub fn read_text(path: &Path, lossy: bool) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| ScanError::file_access(path, e))?;
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(err) if lossy => {
            let (res, _, _) = WINDOWS_1252.decode(err.as_bytes());
            Ok(res.into_owned())
        }
        Err(err) => Err(ScanError::file_access(
            path,
            io::Error::new(io::ErrorKind::InvalidData, err.utf8_error()),
        )),
    }
}

/// Splits text into lines without their terminators. `\n`, `\r\n` and a
/// lone `\r` all end a line; a final terminator adds no empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_split_lines_terminators() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_read_text_rejects_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"caf\xe9 {\n}\n").unwrap();

        let err = read_text(file.path(), false).unwrap_err();
        assert_eq!(err.io_kind(), io::ErrorKind::InvalidData);

        let text = read_text(file.path(), true).unwrap();
        assert_eq!(text, "café {\n}\n");
    }

    #[test]
    fn test_read_text_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(&dir.path().join("missing.dart"), false).unwrap_err();
        assert_eq!(err.io_kind(), io::ErrorKind::NotFound);
    }
}
