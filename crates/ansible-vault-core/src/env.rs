//! Ansible environment variables relevant to vault lookup

use std::env;

use crate::types::{ANSIBLE_CONFIG_ENV, VAULT_IDENTITY_LIST_ENV};

/// Snapshot of the environment variables the resolver consults
///
/// The resolver never reads the process environment itself; callers pass a
/// snapshot in. Empty values are treated as unset.
///
/// # Example
///
/// ```
/// use ansible_vault_core::AnsibleEnvironment;
///
/// let env = AnsibleEnvironment::new()
///     .with_ansible_config("~/work/ansible.cfg");
/// assert_eq!(env.ansible_config(), Some("~/work/ansible.cfg"));
/// assert_eq!(env.vault_identity_list(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnsibleEnvironment {
    ansible_config: Option<String>,
    vault_identity_list: Option<String>,
}

impl AnsibleEnvironment {
    /// An environment with neither variable set
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture `ANSIBLE_CONFIG` and `ANSIBLE_VAULT_IDENTITY_LIST` from the process
    pub fn from_process() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary lookup function
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            ansible_config: non_empty(lookup(ANSIBLE_CONFIG_ENV)),
            vault_identity_list: non_empty(lookup(VAULT_IDENTITY_LIST_ENV)),
        }
    }

    pub fn with_ansible_config(mut self, path: impl Into<String>) -> Self {
        self.ansible_config = non_empty(Some(path.into()));
        self
    }

    pub fn with_vault_identity_list(mut self, value: impl Into<String>) -> Self {
        self.vault_identity_list = non_empty(Some(value.into()));
        self
    }

    /// Value of `ANSIBLE_CONFIG`
    pub fn ansible_config(&self) -> Option<&str> {
        self.ansible_config.as_deref()
    }

    /// Value of `ANSIBLE_VAULT_IDENTITY_LIST`
    pub fn vault_identity_list(&self) -> Option<&str> {
        self.vault_identity_list.as_deref()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("ANSIBLE_CONFIG", "/opt/ansible.cfg"),
            ("ANSIBLE_VAULT_IDENTITY_LIST", "dev@prompt"),
        ]
        .into_iter()
        .collect();

        let env = AnsibleEnvironment::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(env.ansible_config(), Some("/opt/ansible.cfg"));
        assert_eq!(env.vault_identity_list(), Some("dev@prompt"));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let env = AnsibleEnvironment::from_lookup(|_| Some(String::new()));
        assert_eq!(env, AnsibleEnvironment::new());

        let env = AnsibleEnvironment::new().with_vault_identity_list("");
        assert_eq!(env.vault_identity_list(), None);
    }

    #[test]
    fn test_from_process() {
        env::set_var("ANSIBLE_CONFIG", "/tmp/from-process.cfg");
        let captured = AnsibleEnvironment::from_process();
        env::remove_var("ANSIBLE_CONFIG");

        assert_eq!(captured.ansible_config(), Some("/tmp/from-process.cfg"));
    }
}
