//! Config file reader trait

use std::io;
use std::path::Path;

use async_trait::async_trait;

/// Read access to candidate config files
///
/// Implementations:
/// - `FsConfigReader`: The real filesystem via tokio
/// - `MemoryConfigReader`: In-memory files for testing
#[async_trait]
pub trait ConfigFileReader: Send + Sync {
    /// Whether `path` can be opened for reading
    async fn is_readable(&self, path: &Path) -> bool;

    /// Read the whole file as UTF-8 text
    async fn read_to_string(&self, path: &Path) -> io::Result<String>;
}
