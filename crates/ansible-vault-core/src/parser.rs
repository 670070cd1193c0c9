//! `ansible.cfg` parsing

use std::path::Path;

use ini::{Ini, ParseOption};

use crate::error::{VaultConfigError, VaultConfigResult};
use crate::types::VaultDefaults;

/// Section holding the vault settings
pub const DEFAULTS_SECTION: &str = "defaults";
pub const VAULT_IDENTITY_LIST_KEY: &str = "vault_identity_list";
pub const VAULT_PASSWORD_FILE_KEY: &str = "vault_password_file";

/// Extract the vault settings from INI text
///
/// Repeated `[defaults]` blocks are merged and a key set more than once keeps
/// its last value. Unquoted values end at the first unescaped `;` or `#`.
/// `path` is only used to label parse errors.
pub fn parse_vault_defaults(content: &str, path: &Path) -> VaultConfigResult<VaultDefaults> {
    // Quotes and escapes are handled by `clean_value`
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(content, options)
        .map_err(|e| VaultConfigError::parse(path, e.to_string()))?;

    Ok(VaultDefaults::new(
        last_value(&ini, VAULT_IDENTITY_LIST_KEY),
        last_value(&ini, VAULT_PASSWORD_FILE_KEY),
    ))
}

fn last_value(ini: &Ini, key: &str) -> Option<String> {
    ini.section_all(Some(DEFAULTS_SECTION))
        .flat_map(|section| section.get_all(key))
        .last()
        .map(clean_value)
}

/// Unquote a raw value, or strip its inline comment
fn clean_value(raw: &str) -> String {
    let raw = raw.trim();
    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].to_string();
    }
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        // Invalid JSON strings are kept as written, quotes included
        return serde_json::from_str::<String>(raw).unwrap_or_else(|_| raw.to_string());
    }
    strip_inline_comment(raw)
}

/// Cut at the first unescaped `;` or `#`
///
/// `\;`, `\#` and `\\` unescape; any other backslash is kept as is.
fn strip_inline_comment(raw: &str) -> String {
    let mut value = String::with_capacity(raw.len());
    let mut escaped = false;

    for c in raw.chars() {
        if escaped {
            if !matches!(c, '\\' | ';' | '#') {
                value.push('\\');
            }
            value.push(c);
            escaped = false;
        } else if c == ';' || c == '#' {
            break;
        } else if c == '\\' {
            escaped = true;
        } else {
            value.push(c);
        }
    }
    if escaped {
        value.push('\\');
    }

    value.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> VaultDefaults {
        parse_vault_defaults(content, Path::new("ansible.cfg")).unwrap()
    }

    #[test]
    fn test_reads_both_keys() {
        let defaults = parse(
            "[defaults]\n\
             inventory = ./hosts\n\
             vault_identity_list = dev@~/.dev_pass, prod@prompt\n\
             vault_password_file = ~/.vault_pass\n",
        );
        assert_eq!(defaults.vault_identity_list.as_deref(), Some("dev@~/.dev_pass, prod@prompt"));
        assert_eq!(defaults.vault_password_file.as_deref(), Some("~/.vault_pass"));
    }

    #[test]
    fn test_other_sections_ignored() {
        let defaults = parse(
            "[privilege_escalation]\n\
             vault_password_file = /nope\n\
             [defaults]\n\
             forks = 10\n",
        );
        assert!(defaults.is_empty());
    }

    #[test]
    fn test_missing_defaults_section() {
        assert!(parse("[ssh_connection]\npipelining = True\n").is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_comments_skipped() {
        let defaults = parse(
            "# managed by ops\n\
             [defaults]\n\
             ; vault_password_file = /old\n\
             vault_identity_list=/a/b\n",
        );
        assert_eq!(defaults.vault_identity_list.as_deref(), Some("/a/b"));
        assert_eq!(defaults.vault_password_file, None);
    }

    #[test]
    fn test_inline_comments_stripped() {
        let defaults = parse(
            "[defaults]\n\
             vault_password_file = ~/.vault_pass ; legacy\n\
             vault_identity_list = dev@prompt # rotated monthly\n",
        );
        assert_eq!(defaults.vault_password_file.as_deref(), Some("~/.vault_pass"));
        assert_eq!(defaults.vault_identity_list.as_deref(), Some("dev@prompt"));
    }

    #[test]
    fn test_escaped_comment_characters_kept() {
        let defaults = parse("[defaults]\nvault_password_file = /ops/pass\\#1\\;2 ; note\n");
        assert_eq!(defaults.vault_password_file.as_deref(), Some("/ops/pass#1;2"));
    }

    #[test]
    fn test_quoted_values_keep_comment_characters() {
        let defaults = parse(
            "[defaults]\n\
             vault_password_file = \"/ops/pass;1\"\n\
             vault_identity_list = 'dev@/ops/#dev'\n",
        );
        assert_eq!(defaults.vault_password_file.as_deref(), Some("/ops/pass;1"));
        assert_eq!(defaults.vault_identity_list.as_deref(), Some("dev@/ops/#dev"));
    }

    #[test]
    fn test_comment_only_value_is_absent() {
        let defaults = parse("[defaults]\nvault_identity_list = ; unset for now\nvault_password_file = /p\n");
        assert_eq!(defaults.vault_identity_list, None);
        assert_eq!(defaults.vault_password_file.as_deref(), Some("/p"));
    }

    #[test]
    fn test_repeated_defaults_sections_merge() {
        let defaults = parse(
            "[defaults]\n\
             forks = 5\n\
             vault_password_file = /early\n\
             [ssh_connection]\n\
             pipelining=True\n\
             [defaults]\n\
             vault_identity_list = /late\n",
        );
        assert_eq!(defaults.vault_identity_list.as_deref(), Some("/late"));
        assert_eq!(defaults.vault_password_file.as_deref(), Some("/early"));
    }

    #[test]
    fn test_last_value_wins() {
        let defaults = parse(
            "[defaults]\n\
             vault_identity_list = /first\n\
             vault_identity_list = /second\n\
             [defaults]\n\
             vault_password_file = /a\n\
             [defaults]\n\
             vault_password_file = /b\n",
        );
        assert_eq!(defaults.vault_identity_list.as_deref(), Some("/second"));
        assert_eq!(defaults.vault_password_file.as_deref(), Some("/b"));
    }

    #[test]
    fn test_backslashes_kept() {
        let defaults = parse("[defaults]\nvault_password_file = C:\\ops\\pass.txt\n");
        assert_eq!(defaults.vault_password_file.as_deref(), Some("C:\\ops\\pass.txt"));
    }

    #[test]
    fn test_empty_value_is_absent() {
        let defaults = parse("[defaults]\nvault_identity_list =\nvault_password_file = /p\n");
        assert_eq!(defaults.vault_identity_list, None);
        assert_eq!(defaults.vault_password_file.as_deref(), Some("/p"));
    }

    #[test]
    fn test_malformed_section_header() {
        let err = parse_vault_defaults("[defaults\nvault_identity_list = /a\n", Path::new("/x/ansible.cfg"))
            .unwrap_err();
        assert!(matches!(err, VaultConfigError::Parse { .. }));
        assert!(err.to_string().contains("/x/ansible.cfg"));
    }
}
