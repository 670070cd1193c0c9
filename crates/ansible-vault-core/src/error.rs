//! Vault configuration error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving vault configuration
///
/// Missing or unreadable files are not errors; they are reported as absence.
#[derive(Error, Debug)]
pub enum VaultConfigError {
    /// Tilde expansion was given something other than a string
    #[error("Expected a string, got {found}")]
    InvalidPathType { found: &'static str },

    /// Reading a config file failed after its access check passed
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file content is not valid INI
    #[error("Failed to parse '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl VaultConfigError {
    /// Create an invalid path type error
    pub fn invalid_path_type(found: &'static str) -> Self {
        Self::InvalidPathType { found }
    }

    /// Create an IO error for a config file
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error for a config file
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type VaultConfigResult<T> = Result<T, VaultConfigError>;
