//! Core types for vault configuration lookup

mod vault;
mod candidate;

pub use vault::{VaultConfig, VaultConfigSource, VaultDefaults, VAULT_IDENTITY_LIST_ENV, ANSIBLE_CONFIG_ENV};
pub use candidate::{Candidate, CandidateKind, CandidatePathList};
