//! Project root discovery

use std::path::{Path, PathBuf};

use crate::log_info;
use crate::logging::{Logger, NoOpLogger};

/// Name of the Ansible project config file
pub const ANSIBLE_CFG: &str = "ansible.cfg";

/// Find the Ansible project root for a document
///
/// See [`resolve_root_directory_with_logger`].
pub fn resolve_root_directory(document_path: &Path, workspace_root: Option<&Path>) -> Option<PathBuf> {
    resolve_root_directory_with_logger(document_path, workspace_root, &NoOpLogger)
}

/// Find the Ansible project root for a document
///
/// Walks up from the directory containing `document_path` and returns the
/// first directory holding an `ansible.cfg`. The walk stops at
/// `workspace_root` (which is not probed) or at the filesystem root; either
/// way the workspace root is returned, or `None` if there is none.
pub fn resolve_root_directory_with_logger(
    document_path: &Path,
    workspace_root: Option<&Path>,
    logger: &dyn Logger,
) -> Option<PathBuf> {
    let mut current = non_empty_parent(document_path);

    while let Some(dir) = current {
        if workspace_root == Some(dir) {
            break;
        }
        if dir.join(ANSIBLE_CFG).exists() {
            log_info!(logger, "Ansible root directory found: {}", dir.display());
            return Some(dir.to_path_buf());
        }
        current = non_empty_parent(dir);
    }

    match workspace_root {
        Some(root) => log_info!(logger, "No ansible.cfg found, using workspace folder: {}", root.display()),
        None => log_info!(logger, "No ansible.cfg found and no workspace folder"),
    }
    workspace_root.map(Path::to_path_buf)
}

fn non_empty_parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}
