//! Filesystem-backed config reader

use std::io;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use super::traits::ConfigFileReader;

/// Reads config files from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FsConfigReader;

impl FsConfigReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConfigFileReader for FsConfigReader {
    async fn is_readable(&self, path: &Path) -> bool {
        fs::File::open(path).await.is_ok()
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_fs_reader() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ansible.cfg");
        let reader = FsConfigReader::new();

        assert!(!reader.is_readable(&path).await);

        std::fs::write(&path, "[defaults]\n").unwrap();
        assert!(reader.is_readable(&path).await);
        assert_eq!(reader.read_to_string(&path).await.unwrap(), "[defaults]\n");
    }

    #[tokio::test]
    async fn test_fs_reader_directory_fails_on_read() {
        let dir = tempdir().unwrap();
        let reader = FsConfigReader::new();

        assert!(reader.read_to_string(dir.path()).await.is_err());
    }
}
