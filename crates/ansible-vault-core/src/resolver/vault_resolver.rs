//! Vault configuration resolution
//!
//! Lookup order, highest priority first:
//! 1. `ANSIBLE_VAULT_IDENTITY_LIST` (no files are read when set)
//! 2. The file named by `ANSIBLE_CONFIG`
//! 3. `ansible.cfg` in the project root
//! 4. `~/.ansible.cfg`
//! 5. `/etc/ansible/ansible.cfg`

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::join_all;

use crate::env::AnsibleEnvironment;
use crate::error::{VaultConfigError, VaultConfigResult};
use crate::logging::{NoOpLogger, SharedLogger};
use crate::parser::parse_vault_defaults;
use crate::paths::{home_dir, untildify_with_home};
use crate::reader::{ConfigFileReader, FsConfigReader};
use crate::types::{Candidate, CandidateKind, CandidatePathList, VaultConfig};
use crate::{log_debug, log_info, log_warn};

use super::root_directory::{resolve_root_directory_with_logger, ANSIBLE_CFG};

/// User-level config file
pub const USER_CONFIG_PATH: &str = "~/.ansible.cfg";

/// System-wide config file
pub const SYSTEM_CONFIG_PATH: &str = "/etc/ansible/ansible.cfg";

/// Resolves vault settings from the environment and Ansible config files
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use ansible_vault_core::VaultConfigResolver;
///
/// # async fn run() {
/// let resolver = VaultConfigResolver::new();
/// let root = resolver.resolve_root_directory(
///     Path::new("/ws/playbooks/site.yml"),
///     Some(Path::new("/ws")),
/// );
/// if let Some(config) = resolver.resolve(root.as_deref()).await {
///     println!("vault settings from {}", config.source_path());
/// }
/// # }
/// ```
pub struct VaultConfigResolver {
    environment: AnsibleEnvironment,
    reader: Arc<dyn ConfigFileReader>,
    home_dir: Option<PathBuf>,
    logger: SharedLogger,
}

impl VaultConfigResolver {
    /// Resolver over the process environment and the real filesystem
    pub fn new() -> Self {
        Self {
            environment: AnsibleEnvironment::from_process(),
            reader: Arc::new(FsConfigReader::new()),
            home_dir: home_dir().map(Path::to_path_buf),
            logger: Arc::new(NoOpLogger::new()),
        }
    }

    /// Replace the environment snapshot
    pub fn with_environment(mut self, environment: AnsibleEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Replace the file reader
    pub fn with_reader(mut self, reader: Arc<dyn ConfigFileReader>) -> Self {
        self.reader = reader;
        self
    }

    /// Override the home directory used for `~` expansion
    pub fn with_home_dir(mut self, home_dir: Option<PathBuf>) -> Self {
        self.home_dir = home_dir;
        self
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn environment(&self) -> &AnsibleEnvironment {
        &self.environment
    }

    /// Find the Ansible project root for a document
    ///
    /// Same walk as [`super::resolve_root_directory`], logged through this
    /// resolver's logger.
    pub fn resolve_root_directory(&self, document_path: &Path, workspace_root: Option<&Path>) -> Option<PathBuf> {
        resolve_root_directory_with_logger(document_path, workspace_root, self.logger.as_ref())
    }

    /// Resolve the vault configuration
    ///
    /// `ANSIBLE_VAULT_IDENTITY_LIST` wins outright; otherwise this is [`Self::scan`].
    pub async fn resolve(&self, root_path: Option<&Path>) -> Option<VaultConfig> {
        if let Some(identity_list) = self.environment.vault_identity_list() {
            log_info!(self.logger, "Using 'vault_identity_list' from ANSIBLE_VAULT_IDENTITY_LIST");
            return VaultConfig::from_environment(identity_list);
        }
        self.scan(root_path).await
    }

    /// Search the config files, treating any failure as "not found"
    pub async fn scan(&self, root_path: Option<&Path>) -> Option<VaultConfig> {
        match self.try_scan(root_path).await {
            Ok(config) => config,
            Err(e) => {
                log_warn!(self.logger, "Config file scan failed, ignoring all candidates: {}", e);
                None
            }
        }
    }

    /// Search the config files
    ///
    /// All candidates are read concurrently and the first one (by priority)
    /// holding a vault setting wins. If any candidate fails with something
    /// other than plain absence, the whole scan fails.
    pub async fn try_scan(&self, root_path: Option<&Path>) -> VaultConfigResult<Option<VaultConfig>> {
        let candidates = self.candidate_paths(root_path);

        let reads = candidates.iter().map(|c| self.read_vault_config_file(&c.path));
        let results = join_all(reads)
            .await
            .into_iter()
            .collect::<VaultConfigResult<Vec<_>>>()?;

        let found = results.into_iter().flatten().next();
        match &found {
            Some(config) => log_info!(
                self.logger,
                "Found 'defaults.vault_identity_list' within '{}'",
                config.source_path()
            ),
            None => log_info!(self.logger, "Found no 'defaults.vault_identity_list' within config files"),
        }
        Ok(found)
    }

    /// Read vault settings from a single config file
    ///
    /// Returns `Ok(None)` when the file can't be opened or holds neither
    /// setting. Read errors after the access check and INI syntax errors are
    /// returned as `Err`.
    pub async fn read_vault_config_file(&self, path: &Path) -> VaultConfigResult<Option<VaultConfig>> {
        log_info!(self.logger, "Reading '{}'...", path.display());

        if !self.reader.is_readable(path).await {
            log_debug!(self.logger, "'{}' is not readable, skipping", path.display());
            return Ok(None);
        }

        let content = self
            .reader
            .read_to_string(path)
            .await
            .map_err(|e: io::Error| VaultConfigError::io(path, e))?;
        let defaults = parse_vault_defaults(&content, path)?;

        Ok(VaultConfig::from_file(path, defaults))
    }

    /// Candidate config files for `root_path`, highest priority first
    pub fn candidate_paths(&self, root_path: Option<&Path>) -> CandidatePathList {
        let mut candidates = CandidatePathList::new();
        candidates.push(Candidate::new(self.expand(Path::new(USER_CONFIG_PATH)), CandidateKind::User));
        candidates.push(Candidate::new(self.expand(Path::new(SYSTEM_CONFIG_PATH)), CandidateKind::System));

        if let Some(root) = root_path {
            candidates.push_front(Candidate::new(self.expand(&root.join(ANSIBLE_CFG)), CandidateKind::Project));
        }

        if let Some(explicit) = self.environment.ansible_config() {
            candidates.push_front(Candidate::new(self.expand(Path::new(explicit)), CandidateKind::AnsibleConfigEnv));
        }

        for candidate in &candidates {
            log_debug!(self.logger, "Candidate ({}): {}", candidate.kind.as_str(), candidate.path.display());
        }
        candidates
    }

    fn expand(&self, path: &Path) -> PathBuf {
        match path.to_str() {
            Some(s) => PathBuf::from(untildify_with_home(s, self.home_dir.as_deref())),
            None => path.to_path_buf(),
        }
    }
}

impl Default for VaultConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VaultConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultConfigResolver")
            .field("environment", &self.environment)
            .field("home_dir", &self.home_dir)
            .finish()
    }
}
