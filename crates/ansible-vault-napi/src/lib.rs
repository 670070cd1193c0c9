//! Node.js bindings for the Ansible Vault config resolver via napi-rs
//!
//! Every call captures the process environment afresh, so changes to
//! `ANSIBLE_CONFIG` or `ANSIBLE_VAULT_IDENTITY_LIST` made by the extension
//! host are picked up without reloading the module.

#![deny(clippy::all)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use napi::bindgen_prelude::*;
use napi::{Env, JsUnknown, ValueType};
use napi_derive::napi;

use ansible_vault_core::{
    paths::untildify_value,
    AnsibleEnvironment,
    VaultConfigError,
    ConsoleLogger,
    NoOpLogger,
    SharedLogger,
    VaultConfig as CoreVaultConfig,
    VaultConfigResolver as CoreVaultConfigResolver,
};

// ============================================================================
// Types
// ============================================================================

/// A resolved vault configuration
#[napi(object)]
pub struct VaultConfig {
    /// Config file path, or `ANSIBLE_VAULT_IDENTITY_LIST` for environment values
    pub path: String,
    pub vault_identity_list: Option<String>,
    pub vault_password_file: Option<String>,
}

impl From<CoreVaultConfig> for VaultConfig {
    fn from(config: CoreVaultConfig) -> Self {
        Self {
            path: config.source_path(),
            vault_identity_list: config.vault_identity_list().map(str::to_string),
            vault_password_file: config.vault_password_file().map(str::to_string),
        }
    }
}

/// Options shared by the resolver entry points
#[napi(object)]
pub struct ResolveOptions {
    /// Log decisions to the console (default: true)
    pub verbose: Option<bool>,
    /// Home directory to use for `~` expansion instead of the user's
    pub home_dir: Option<String>,
}

fn build_resolver(options: Option<ResolveOptions>) -> CoreVaultConfigResolver {
    let (verbose, home_dir) = match options {
        Some(o) => (o.verbose.unwrap_or(true), o.home_dir),
        None => (true, None),
    };

    let logger: SharedLogger = if verbose {
        Arc::new(ConsoleLogger::new())
    } else {
        Arc::new(NoOpLogger::new())
    };

    let mut resolver = CoreVaultConfigResolver::new()
        .with_environment(AnsibleEnvironment::from_process())
        .with_logger(logger);
    if let Some(home) = home_dir {
        resolver = resolver.with_home_dir(Some(PathBuf::from(home)));
    }
    resolver
}

// ============================================================================
// Entry points
// ============================================================================

/// Expand a leading `~` to the home directory
///
/// Throws when `value` is not a string.
#[napi]
pub fn untildify(env: Env, value: JsUnknown) -> Result<String> {
    let value: Option<serde_json::Value> = match value.get_type()? {
        ValueType::Undefined => None,
        ValueType::Function => return Err(invalid_arg(VaultConfigError::invalid_path_type("function"))),
        ValueType::Symbol => return Err(invalid_arg(VaultConfigError::invalid_path_type("symbol"))),
        _ => Some(env.from_js_value(value)?),
    };
    untildify_value(value.as_ref()).map_err(invalid_arg)
}

fn invalid_arg(e: VaultConfigError) -> Error {
    Error::new(Status::InvalidArg, e.to_string())
}

/// Walk up from a document to the nearest directory holding `ansible.cfg`
#[napi]
pub fn resolve_root_directory(
    document_path: String,
    workspace_root: Option<String>,
    options: Option<ResolveOptions>,
) -> Option<String> {
    build_resolver(options)
        .resolve_root_directory(Path::new(&document_path), workspace_root.as_deref().map(Path::new))
        .map(|p| p.display().to_string())
}

/// Resolve vault settings, environment first, then config files
#[napi]
pub async fn resolve_vault_config(
    root_path: Option<String>,
    options: Option<ResolveOptions>,
) -> Result<Option<VaultConfig>> {
    let resolver = build_resolver(options);
    let config = resolver.resolve(root_path.as_deref().map(Path::new)).await;
    Ok(config.map(Into::into))
}

/// Search config files only, ignoring `ANSIBLE_VAULT_IDENTITY_LIST`
#[napi]
pub async fn scan_vault_config(
    root_path: Option<String>,
    options: Option<ResolveOptions>,
) -> Result<Option<VaultConfig>> {
    let resolver = build_resolver(options);
    let config = resolver.scan(root_path.as_deref().map(Path::new)).await;
    Ok(config.map(Into::into))
}

/// Read vault settings from one config file
///
/// Resolves to `null` when the file is unreadable or has no vault settings;
/// rejects when the file exists but can't be read or parsed.
#[napi]
pub async fn read_vault_config_file(path: String, options: Option<ResolveOptions>) -> Result<Option<VaultConfig>> {
    let resolver = build_resolver(options);
    resolver
        .read_vault_config_file(Path::new(&path))
        .await
        .map(|config| config.map(Into::into))
        .map_err(|e| Error::from_reason(e.to_string()))
}

/// Candidate config files in priority order, after `~` expansion
#[napi]
pub fn candidate_paths(root_path: Option<String>, options: Option<ResolveOptions>) -> Vec<String> {
    build_resolver(options)
        .candidate_paths(root_path.as_deref().map(Path::new))
        .iter()
        .map(|c| c.path.display().to_string())
        .collect()
}
