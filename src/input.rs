//! Bounded reads of generator inputs (scripts, expected outputs, helper source).

use std::fs;
use std::path::Path;

use crate::errors::{GenError, GenResult};

/// Maximum input file size (100 MB)
///
/// Larger files are rejected before reading; they could never be embedded on a target anyway.
pub const MAX_INPUT_SIZE: u64 = 100 * 1024 * 1024;

/// Read a whole input file as raw bytes.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be accessed or read (I/O error)
/// - The file exceeds `MAX_INPUT_SIZE`
pub fn read_input(path: &Path) -> GenResult<Vec<u8>> {
    let metadata = fs::metadata(path).map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.len() > MAX_INPUT_SIZE {
        return Err(GenError::InputTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_INPUT_SIZE,
        });
    }

    fs::read(path).map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a whole input file and decode it as UTF-8.
pub fn read_input_text(path: &Path) -> GenResult<String> {
    let bytes = read_input(path)?;
    String::from_utf8(bytes).map_err(|e| GenError::Encoding {
        path: path.to_path_buf(),
        source: e.utf8_error(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(&dir.path().join("nope.py")).unwrap_err();
        assert!(matches!(err, GenError::Io { .. }));
    }

    #[test]
    fn test_read_text_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.py");
        fs::write(&path, [b'a', 0xff]).unwrap();
        assert!(matches!(read_input_text(&path), Err(GenError::Encoding { .. })));
        assert_eq!(read_input(&path).unwrap(), vec![b'a', 0xff]);
    }
}
