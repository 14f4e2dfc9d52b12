//! Source selection: stdin or a file, read to completion

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::PbcopyError;

/// Read the whole payload from `path`, or from `stdin` when no path is given
pub fn read_source<R: Read>(path: Option<&Path>, mut stdin: R) -> Result<Vec<u8>, PbcopyError> {
    let mut buffer = Vec::new();
    match path {
        Some(file_path) => {
            let mut file = File::open(file_path).map_err(PbcopyError::InputRead)?;
            file.read_to_end(&mut buffer).map_err(PbcopyError::InputRead)?;
            log::debug!("Read {} bytes from {:?}", buffer.len(), file_path);
        }
        None => {
            stdin
                .read_to_end(&mut buffer)
                .map_err(PbcopyError::InputRead)?;
        }
    }
    Ok(buffer)
}

/// Drop every trailing `\n` and `\r`, leaving interior bytes untouched
pub fn trim_trailing_newlines(payload: &[u8]) -> &[u8] {
    let end = payload
        .iter()
        .rposition(|&b| b != b'\n' && b != b'\r')
        .map_or(0, |i| i + 1);
    &payload[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::{self, Cursor, Write};

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
        }
    }

    #[test]
    fn test_read_from_stdin() {
        let data = read_source(None, Cursor::new(b"from stdin\n".to_vec())).unwrap();
        assert_eq!(data, b"from stdin\n");
    }

    #[test]
    fn test_read_from_file_ignores_stdin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"from file").unwrap();

        let data = read_source(Some(file.path()), Cursor::new(b"ignored".to_vec())).unwrap();
        assert_eq!(data, b"from file");
    }

    #[test]
    fn test_file_not_found_returns_error() {
        let result = read_source(Some(Path::new("tests/nonexistent.txt")), io::empty());
        match result {
            Err(PbcopyError::InputRead(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("Expected InputRead error, got {:?}", other),
        }
    }

    #[test]
    fn test_stdin_failure_returns_error() {
        let result = read_source(None, FailingReader);
        assert!(matches!(result, Err(PbcopyError::InputRead(_))));
    }

    #[test]
    fn test_trim_mixed_trailing_newlines() {
        assert_eq!(trim_trailing_newlines(b"abc\n\r\n"), b"abc");
    }

    #[test]
    fn test_trim_keeps_interior_newlines() {
        assert_eq!(trim_trailing_newlines(b"a\r\nb\n\nc\n"), b"a\r\nb\n\nc");
    }

    #[test]
    fn test_trim_keeps_trailing_spaces() {
        assert_eq!(trim_trailing_newlines(b"abc \t\n"), b"abc \t");
    }

    #[test]
    fn test_trim_only_newlines_is_empty() {
        assert_eq!(trim_trailing_newlines(b"\n\r\n\r"), b"");
        assert_eq!(trim_trailing_newlines(b""), b"");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_trim_only_removes_suffix(
            body in prop::collection::vec(any::<u8>(), 0..64),
            tail in prop::collection::vec(prop::sample::select(vec![b'\n', b'\r']), 0..8)
        ) {
            let mut payload = body.clone();
            payload.extend_from_slice(&tail);

            let trimmed = trim_trailing_newlines(&payload);
            prop_assert!(payload.starts_with(trimmed));
            prop_assert!(trimmed.last().is_none_or(|&b| b != b'\n' && b != b'\r'));
            prop_assert_eq!(trimmed, trim_trailing_newlines(&body));
        }
    }
}
