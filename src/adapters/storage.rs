use crate::domain::ports::Storage;
use crate::utils::error::{Result, SetupError};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(self.full_path(path))?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);
        let write_error = |source| SetupError::FileWriteError {
            path: full_path.display().to_string(),
            source,
        };

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        fs::write(&full_path, data).map_err(write_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        tokio_test::block_on(storage.write_file("prompts/a.txt", b"hello")).unwrap();

        let written = std::fs::read_to_string(temp_dir.path().join("prompts/a.txt")).unwrap();
        assert_eq!(written, "hello");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        tokio_test::block_on(storage.write_file("rules", b"first version")).unwrap();
        tokio_test::block_on(storage.write_file("rules", b"second")).unwrap();

        let data = tokio_test::block_on(storage.read_file("rules")).unwrap();
        assert_eq!(data, b"second");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        let result = tokio_test::block_on(storage.read_file("nope.txt"));
        assert!(matches!(result, Err(SetupError::IoError(_))));
    }

    #[test]
    fn test_write_into_file_path_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("blocker"), b"x").unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        let result = tokio_test::block_on(storage.write_file("blocker/inner.txt", b"data"));
        match result {
            Err(SetupError::FileWriteError { path, .. }) => assert!(path.contains("blocker")),
            other => panic!("expected FileWriteError, got {:?}", other),
        }
    }
}
