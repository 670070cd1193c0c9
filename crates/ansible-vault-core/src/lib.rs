//! Ansible Vault configuration discovery
//!
//! Runtime-agnostic lookup of the `vault_identity_list` and
//! `vault_password_file` settings an editor needs to decrypt vaulted content.
//! This crate can be used from any environment (Node.js via napi-rs, native
//! tools, etc.)
//!
//! ```rust,no_run
//! use std::path::Path;
//! use ansible_vault_core::{AnsibleEnvironment, VaultConfigResolver};
//!
//! # async fn run() {
//! let resolver = VaultConfigResolver::new()
//!     .with_environment(AnsibleEnvironment::from_process());
//!
//! let root = resolver.resolve_root_directory(Path::new("/ws/site.yml"), Some(Path::new("/ws")));
//! match resolver.resolve(root.as_deref()).await {
//!     Some(config) => println!("{:?} from {}", config.vault_identity_list(), config.source_path()),
//!     None => println!("no vault settings"),
//! }
//! # }
//! ```

pub mod types;
pub mod error;
pub mod logging;
pub mod env;
pub mod paths;
pub mod parser;
pub mod reader;
pub mod resolver;

// Re-export commonly used types
pub use types::{
    VaultConfig, VaultConfigSource, VaultDefaults,
    Candidate, CandidateKind, CandidatePathList,
    VAULT_IDENTITY_LIST_ENV, ANSIBLE_CONFIG_ENV,
};

pub use error::{VaultConfigError, VaultConfigResult};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger, MemoryLogger};

pub use env::AnsibleEnvironment;

pub use paths::{untildify, untildify_value};

pub use reader::{ConfigFileReader, FsConfigReader, MemoryConfigReader};

pub use resolver::{VaultConfigResolver, resolve_root_directory};
