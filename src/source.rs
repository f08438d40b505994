use std::{fs, path::Path};

use crate::error::{Error, Result};

/// Reads the whole file as UTF-8 text.
///
/// Missing files, permission problems and invalid UTF-8 all surface as
/// [`Error::FileAccess`].
pub fn read_document(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("[read_document] {} bytes from {}", text.len(), path.display());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::read_document;
    use crate::error::Error;
    use std::fs;
    use std::io::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_reads_utf8_file() {
        let tempdir = TempDir::new().unwrap();
        let path = tempdir.path().join("doc.json");
        fs::write(&path, "{\"b\": \"héllo\"}").unwrap();

        assert_eq!(read_document(&path).unwrap(), "{\"b\": \"héllo\"}");
    }

    #[test]
    fn test_missing_file() {
        let tempdir = TempDir::new().unwrap();
        let path = tempdir.path().join("absent.json");

        match read_document(&path) {
            Err(Error::FileAccess { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("expected FileAccess, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8() {
        let tempdir = TempDir::new().unwrap();
        let path = tempdir.path().join("latin1.json");
        fs::write(&path, b"\"h\xe9llo\"").unwrap();

        match read_document(&path) {
            Err(Error::FileAccess { source, .. }) => {
                assert_eq!(source.kind(), ErrorKind::InvalidData);
            }
            other => panic!("expected FileAccess, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_is_not_readable() {
        let tempdir = TempDir::new().unwrap();
        assert!(matches!(
            read_document(tempdir.path()),
            Err(Error::FileAccess { .. })
        ));
    }
}
