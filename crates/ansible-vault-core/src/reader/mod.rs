//! Config file access
//!
//! - `FsConfigReader`: tokio filesystem access
//! - `MemoryConfigReader`: In-memory files for testing

mod traits;
mod fs;
mod memory;

pub use traits::ConfigFileReader;
pub use fs::FsConfigReader;
pub use memory::MemoryConfigReader;
