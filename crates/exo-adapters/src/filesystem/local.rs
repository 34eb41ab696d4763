//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use exo_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ExoError, ExoResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ExoResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ExoResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> ExoResult<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io_error(path, e, "read file")),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ExoError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        assert_eq!(fs.read_file(&dir.path().join("nope")).unwrap(), None);
    }

    #[test]
    fn write_then_read() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("a/b");
        fs.create_dir_all(&nested).unwrap();
        fs.write_file(&nested.join("f.txt"), "hello").unwrap();

        assert!(fs.exists(&nested.join("f.txt")));
        assert_eq!(
            fs.read_file(&nested.join("f.txt")).unwrap().as_deref(),
            Some("hello")
        );
    }

    #[test]
    fn write_into_missing_dir_names_the_path() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("missing/f.txt");
        let err = LocalFilesystem::new()
            .write_file(&target, "x")
            .unwrap_err();
        assert!(err.to_string().contains("missing"));
    }
}
