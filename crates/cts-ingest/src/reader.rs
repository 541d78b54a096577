//! Export file reading.

use std::fs;
use std::path::Path;

use crate::decode::decode_mac_roman;
use crate::error::{IngestError, Result};

/// Read the tab-delimited export and return its logical lines, decoded
/// from Mac OS Roman.
///
/// Classic Mac exports terminate lines with a bare carriage return, so
/// both CR and LF are accepted as line breaks. Blank lines are skipped.
pub fn read_export(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let text = decode_mac_roman(&bytes);
    let lines: Vec<String> = text
        .split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    if lines.is_empty() {
        return Err(IngestError::EmptyExport {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(path = %path.display(), lines = lines.len(), "read export file");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn splits_on_carriage_returns() {
        let file = write_temp(b"a\tb\rc\td\r");
        let lines = read_export(file.path()).unwrap();
        assert_eq!(lines, vec!["a\tb", "c\td"]);
    }

    #[test]
    fn decodes_mac_roman_bytes() {
        // "Jürgen" with MacRoman u-umlaut.
        let file = write_temp(b"J\x9Frgen\tx\n");
        let lines = read_export(file.path()).unwrap();
        assert_eq!(lines, vec!["Jürgen\tx"]);
    }

    #[test]
    fn empty_file_is_an_error() {
        let file = write_temp(b"\r\n  \r");
        let result = read_export(file.path());
        assert!(matches!(result, Err(IngestError::EmptyExport { .. })));
    }

    #[test]
    fn missing_file_is_not_found() {
        let result = read_export(Path::new("/nonexistent/export.tab"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
