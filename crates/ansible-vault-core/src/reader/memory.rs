//! In-memory config reader

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use super::traits::ConfigFileReader;

/// In-memory config reader for testing
///
/// Every call through [`ConfigFileReader`] is counted so tests can assert
/// that no file access happened.
///
/// # Example
///
/// ```
/// use ansible_vault_core::reader::MemoryConfigReader;
///
/// let reader = MemoryConfigReader::new()
///     .with_file("/etc/ansible/ansible.cfg", "[defaults]\nvault_password_file = /p\n");
/// assert_eq!(reader.access_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct MemoryConfigReader {
    files: RwLock<HashMap<PathBuf, String>>,
    broken: RwLock<HashMap<PathBuf, io::ErrorKind>>,
    accesses: AtomicUsize,
}

impl MemoryConfigReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a readable file
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Add a path that passes the access check but fails when read
    pub fn with_broken_file(self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        if let Ok(mut broken) = self.broken.write() {
            broken.insert(path.into(), kind);
        }
        self
    }

    /// Add or replace a file
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        if let Ok(mut files) = self.files.write() {
            files.insert(path.into(), content.into());
        }
    }

    /// Number of `is_readable`/`read_to_string` calls made so far
    pub fn access_count(&self) -> usize {
        self.accesses.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigFileReader for MemoryConfigReader {
    async fn is_readable(&self, path: &Path) -> bool {
        self.accesses.fetch_add(1, Ordering::SeqCst);
        let in_files = self.files.read().map(|f| f.contains_key(path)).unwrap_or(false);
        let in_broken = self.broken.read().map(|b| b.contains_key(path)).unwrap_or(false);
        in_files || in_broken
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.accesses.fetch_add(1, Ordering::SeqCst);
        if let Some(kind) = self.broken.read().ok().and_then(|b| b.get(path).copied()) {
            return Err(io::Error::new(kind, format!("cannot read {}", path.display())));
        }
        self.files
            .read()
            .ok()
            .and_then(|f| f.get(path).cloned())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_reader() {
        let reader = MemoryConfigReader::new()
            .with_file("/a/ansible.cfg", "[defaults]\n")
            .with_broken_file("/b/ansible.cfg", io::ErrorKind::InvalidData);

        assert!(reader.is_readable(Path::new("/a/ansible.cfg")).await);
        assert!(reader.is_readable(Path::new("/b/ansible.cfg")).await);
        assert!(!reader.is_readable(Path::new("/c/ansible.cfg")).await);

        assert_eq!(reader.read_to_string(Path::new("/a/ansible.cfg")).await.unwrap(), "[defaults]\n");
        let err = reader.read_to_string(Path::new("/b/ansible.cfg")).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        assert_eq!(reader.access_count(), 5);
    }
}
