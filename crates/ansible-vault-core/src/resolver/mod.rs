//! Vault configuration resolution
//!
//! - `resolve_root_directory`: find the project root for a document
//! - `VaultConfigResolver`: pick the vault settings from env and config files

mod root_directory;
mod vault_resolver;

pub use root_directory::{resolve_root_directory, resolve_root_directory_with_logger, ANSIBLE_CFG};
pub use vault_resolver::{VaultConfigResolver, USER_CONFIG_PATH, SYSTEM_CONFIG_PATH};
