//! Home directory expansion

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::error::{VaultConfigError, VaultConfigResult};

/// Home directory, resolved once per process
static HOME_DIR: Lazy<Option<PathBuf>> = Lazy::new(dirs::home_dir);

/// The current user's home directory, if one is known
pub fn home_dir() -> Option<&'static Path> {
    HOME_DIR.as_deref()
}

/// Expand a leading `~` using the process home directory
///
/// See [`untildify_with_home`].
pub fn untildify(path: &str) -> String {
    untildify_with_home(path, home_dir())
}

/// Expand a leading `~` using `home`
///
/// Only `~` on its own or followed by `/` or `\` is replaced; `~user` forms
/// and tildes elsewhere are left alone. Without a home directory the input is
/// returned unchanged.
///
/// ```
/// use std::path::Path;
/// use ansible_vault_core::paths::untildify_with_home;
///
/// let home = Path::new("/home/ops");
/// assert_eq!(untildify_with_home("~/.ansible.cfg", Some(home)), "/home/ops/.ansible.cfg");
/// assert_eq!(untildify_with_home("~ops/.ansible.cfg", Some(home)), "~ops/.ansible.cfg");
/// ```
pub fn untildify_with_home(path: &str, home: Option<&Path>) -> String {
    let Some(home) = home else {
        return path.to_string();
    };
    match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => {
            format!("{}{}", home.to_string_lossy(), rest)
        }
        _ => path.to_string(),
    }
}

/// Expand a dynamically typed value, failing fast on non-strings
///
/// Used at the JavaScript boundary where the argument type is not checked.
/// `None` stands for `undefined`.
pub fn untildify_value(value: Option<&Value>) -> VaultConfigResult<String> {
    match value {
        Some(Value::String(path)) => Ok(untildify(path)),
        Some(other) => Err(VaultConfigError::invalid_path_type(js_type_name(other))),
        None => Err(VaultConfigError::invalid_path_type("undefined")),
    }
}

/// The `typeof` name JavaScript would report for `value`
fn js_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null | Value::Array(_) | Value::Object(_) => "object",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HOME: &str = "/home/ops";

    fn expand(path: &str) -> String {
        untildify_with_home(path, Some(Path::new(HOME)))
    }

    #[test]
    fn test_bare_tilde() {
        assert_eq!(expand("~"), "/home/ops");
    }

    #[test]
    fn test_tilde_with_separators() {
        assert_eq!(expand("~/.ansible.cfg"), "/home/ops/.ansible.cfg");
        assert_eq!(expand("~\\ansible.cfg"), "/home/ops\\ansible.cfg");
    }

    #[test]
    fn test_replaced_exactly_once() {
        assert_eq!(expand("~/~/x"), "/home/ops/~/x");
    }

    #[test]
    fn test_other_tilde_forms_untouched() {
        assert_eq!(expand("~foo"), "~foo");
        assert_eq!(expand("~foo/ansible.cfg"), "~foo/ansible.cfg");
        assert_eq!(expand("/etc/~/ansible.cfg"), "/etc/~/ansible.cfg");
        assert_eq!(expand(""), "");
    }

    #[test]
    fn test_no_home_leaves_input() {
        assert_eq!(untildify_with_home("~/.ansible.cfg", None), "~/.ansible.cfg");
    }

    #[test]
    fn test_untildify_value_rejects_non_strings() {
        let err = untildify_value(Some(&json!(42))).unwrap_err();
        assert_eq!(err.to_string(), "Expected a string, got number");

        assert!(matches!(
            untildify_value(Some(&Value::Null)),
            Err(VaultConfigError::InvalidPathType { found: "object" })
        ));
        assert!(matches!(
            untildify_value(Some(&json!(true))),
            Err(VaultConfigError::InvalidPathType { found: "boolean" })
        ));
    }

    #[test]
    fn test_untildify_value_reports_undefined() {
        let err = untildify_value(None).unwrap_err();
        assert_eq!(err.to_string(), "Expected a string, got undefined");
    }

    #[test]
    fn test_untildify_value_accepts_strings() {
        assert_eq!(untildify_value(Some(&json!("/etc/ansible/ansible.cfg"))).unwrap(), "/etc/ansible/ansible.cfg");
        assert_eq!(untildify_value(Some(&json!("~foo"))).unwrap(), "~foo");
    }
}
