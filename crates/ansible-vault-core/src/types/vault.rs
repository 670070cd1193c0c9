//! Vault configuration types

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable that names vault identities directly
pub const VAULT_IDENTITY_LIST_ENV: &str = "ANSIBLE_VAULT_IDENTITY_LIST";

/// Environment variable that points at an explicit config file
pub const ANSIBLE_CONFIG_ENV: &str = "ANSIBLE_CONFIG";

/// Where a vault configuration was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum VaultConfigSource {
    /// `ANSIBLE_VAULT_IDENTITY_LIST` was set
    Environment,
    /// A config file on disk
    File(PathBuf),
}

impl VaultConfigSource {
    /// The source as a path string
    ///
    /// Environment-sourced configs report the variable name in place of a path.
    pub fn path_string(&self) -> String {
        match self {
            VaultConfigSource::Environment => VAULT_IDENTITY_LIST_ENV.to_string(),
            VaultConfigSource::File(path) => path.display().to_string(),
        }
    }

    /// The config file, if the value came from one
    pub fn file(&self) -> Option<&Path> {
        match self {
            VaultConfigSource::Environment => None,
            VaultConfigSource::File(path) => Some(path),
        }
    }
}

impl fmt::Display for VaultConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path_string())
    }
}

impl From<VaultConfigSource> for String {
    fn from(source: VaultConfigSource) -> Self {
        source.path_string()
    }
}

impl From<String> for VaultConfigSource {
    fn from(value: String) -> Self {
        if value == VAULT_IDENTITY_LIST_ENV {
            VaultConfigSource::Environment
        } else {
            VaultConfigSource::File(PathBuf::from(value))
        }
    }
}

/// The vault settings read from the `[defaults]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultDefaults {
    /// `vault_identity_list`, kept verbatim
    pub vault_identity_list: Option<String>,
    /// `vault_password_file`, kept verbatim
    pub vault_password_file: Option<String>,
}

impl VaultDefaults {
    /// Build defaults, dropping empty values
    pub fn new(vault_identity_list: Option<String>, vault_password_file: Option<String>) -> Self {
        Self {
            vault_identity_list: vault_identity_list.filter(|v| !v.is_empty()),
            vault_password_file: vault_password_file.filter(|v| !v.is_empty()),
        }
    }

    /// True when neither setting carries a value
    pub fn is_empty(&self) -> bool {
        self.vault_identity_list.as_deref().map_or(true, str::is_empty)
            && self.vault_password_file.as_deref().map_or(true, str::is_empty)
    }
}

/// A resolved vault configuration
///
/// Always carries at least one non-empty setting; the constructors return
/// `None` rather than build an empty config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaultConfig {
    #[serde(rename = "path")]
    source: VaultConfigSource,
    defaults: VaultDefaults,
}

impl VaultConfig {
    /// Create a config, or `None` if `defaults` holds no value
    pub fn new(source: VaultConfigSource, defaults: VaultDefaults) -> Option<Self> {
        let defaults = VaultDefaults::new(defaults.vault_identity_list, defaults.vault_password_file);
        if defaults.is_empty() {
            return None;
        }
        Some(Self { source, defaults })
    }

    /// Config taken from `ANSIBLE_VAULT_IDENTITY_LIST`
    pub fn from_environment(vault_identity_list: impl Into<String>) -> Option<Self> {
        Self::new(
            VaultConfigSource::Environment,
            VaultDefaults::new(Some(vault_identity_list.into()), None),
        )
    }

    /// Config read from a file
    pub fn from_file(path: impl Into<PathBuf>, defaults: VaultDefaults) -> Option<Self> {
        Self::new(VaultConfigSource::File(path.into()), defaults)
    }

    pub fn source(&self) -> &VaultConfigSource {
        &self.source
    }

    /// Source path string, or the variable name for environment configs
    pub fn source_path(&self) -> String {
        self.source.path_string()
    }

    pub fn defaults(&self) -> &VaultDefaults {
        &self.defaults
    }

    pub fn vault_identity_list(&self) -> Option<&str> {
        self.defaults.vault_identity_list.as_deref()
    }

    pub fn vault_password_file(&self) -> Option<&str> {
        self.defaults.vault_password_file.as_deref()
    }
}
