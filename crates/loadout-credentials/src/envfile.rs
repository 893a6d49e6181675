// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line-oriented `KEY=VALUE` credential file parsing.
//!
//! The credential file is hand-edited infrastructure, so the parser is
//! deliberately forgiving: blank lines and `#` comments are ignored, and
//! malformed lines are skipped rather than failing the whole load. An absent
//! file is an empty credential set, not an error.

use std::collections::HashMap;
use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

/// Parsed credential file with values held as secrets.
///
/// Values never leave this type as plaintext: the resolver hands out
/// `${KEY}` indirection tokens, and presence checks happen in here.
pub struct CredentialFile {
    values: HashMap<String, SecretString>,
}

impl std::fmt::Debug for CredentialFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("CredentialFile").field("keys", &keys).finish()
    }
}

impl CredentialFile {
    /// Load credentials from `path`.
    ///
    /// An absent file yields an empty set. An unreadable file is logged and
    /// also yields an empty set: credentials are optional infrastructure and
    /// the hard gate is `missing_keys` at enable time.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no credential file");
                return Self { values: HashMap::new() };
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read credential file");
                return Self { values: HashMap::new() };
            }
        };
        Self::parse(&raw)
    }

    /// Parse credential file content.
    pub fn parse(raw: &str) -> Self {
        let mut values = HashMap::new();
        for line in raw.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            values.insert(key.to_string(), SecretString::from(value.trim().to_string()));
        }
        Self { values }
    }

    /// Whether `key` is present with a non-empty value.
    pub fn has(&self, key: &str) -> bool {
        self.values
            .get(key)
            .is_some_and(|v| !v.expose_secret().is_empty())
    }

    /// Whether `key` appears in the file at all, even with an empty value.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_simple_pairs() {
        let creds = CredentialFile::parse("API_KEY=abc123\nTOKEN=xyz\n");
        assert_eq!(creds.len(), 2);
        assert!(creds.has("API_KEY"));
        assert!(creds.has("TOKEN"));
    }

    #[test]
    fn skips_comments_and_blanks() {
        let creds = CredentialFile::parse("# comment\n\nAPI_KEY=abc\n  # indented comment\n");
        assert_eq!(creds.len(), 1);
        assert!(creds.has("API_KEY"));
    }

    #[test]
    fn skips_malformed_lines() {
        let creds = CredentialFile::parse("NOEQUALS\nAPI_KEY=abc\n=orphan-value\n");
        assert_eq!(creds.len(), 1);
        assert!(creds.has("API_KEY"));
    }

    #[test]
    fn trims_keys_and_values() {
        let creds = CredentialFile::parse("  API_KEY =  abc  \n");
        assert!(creds.has("API_KEY"));
    }

    #[test]
    fn value_may_contain_equals() {
        let creds = CredentialFile::parse("CONN=host=db;port=5432\n");
        assert!(creds.has("CONN"));
    }

    #[test]
    fn empty_value_is_present_but_not_usable() {
        let creds = CredentialFile::parse("API_KEY=\n");
        assert!(creds.contains("API_KEY"));
        assert!(!creds.has("API_KEY"));
    }

    #[test]
    fn missing_file_is_empty_set() {
        let creds = CredentialFile::load(Path::new("/nonexistent/.env"));
        assert!(creds.is_empty());
    }

    #[test]
    fn loads_from_disk() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"API_KEY=secret\n").unwrap();
        let creds = CredentialFile::load(f.path());
        assert!(creds.has("API_KEY"));
    }

    #[test]
    fn debug_output_never_shows_values() {
        let creds = CredentialFile::parse("API_KEY=hunter2\n");
        let debug = format!("{creds:?}");
        assert!(debug.contains("API_KEY"));
        assert!(!debug.contains("hunter2"));
    }
}
