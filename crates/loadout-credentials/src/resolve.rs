// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credential requirement checks and indirection-token resolution.
//!
//! The runtime connection document may be less access-controlled than the
//! credential file itself, so resolved connections carry `${KEY}` tokens
//! that the consuming host expands at load time. Literal secret values are
//! never written anywhere.

use std::collections::BTreeMap;

use loadout_registry::ServerDefinition;

use crate::envfile::CredentialFile;

/// Credential keys declared by `definition` that are absent from the file
/// or present with an empty value.
///
/// A non-empty return blocks activation.
pub fn missing_keys(definition: &ServerDefinition, credentials: &CredentialFile) -> Vec<String> {
    definition
        .env_vars
        .iter()
        .filter(|key| !credentials.has(key))
        .cloned()
        .collect()
}

/// Build the `env` map for a resolved connection: declared keys that are
/// present in the credential file, each mapped to its `${KEY}` indirection
/// token.
pub fn reference_env(
    definition: &ServerDefinition,
    credentials: &CredentialFile,
) -> BTreeMap<String, String> {
    definition
        .env_vars
        .iter()
        .filter(|key| credentials.contains(key))
        .map(|key| (key.clone(), format!("${{{key}}}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadout_registry::ConnectionSpec;

    fn definition(env_vars: &[&str]) -> ServerDefinition {
        ServerDefinition {
            connection: ConnectionSpec::Stdio {
                command: "bin".to_string(),
                args: vec![],
            },
            env_vars: env_vars.iter().map(|s| s.to_string()).collect(),
            required: false,
            used_by: vec![],
            description: String::new(),
            env_file: None,
        }
    }

    #[test]
    fn no_declared_keys_means_nothing_missing() {
        let creds = CredentialFile::parse("");
        assert!(missing_keys(&definition(&[]), &creds).is_empty());
    }

    #[test]
    fn absent_key_is_missing() {
        let creds = CredentialFile::parse("OTHER=x\n");
        assert_eq!(missing_keys(&definition(&["API_KEY"]), &creds), vec!["API_KEY"]);
    }

    #[test]
    fn empty_value_is_missing() {
        let creds = CredentialFile::parse("API_KEY=\n");
        assert_eq!(missing_keys(&definition(&["API_KEY"]), &creds), vec!["API_KEY"]);
    }

    #[test]
    fn present_key_is_not_missing() {
        let creds = CredentialFile::parse("API_KEY=abc\n");
        assert!(missing_keys(&definition(&["API_KEY"]), &creds).is_empty());
    }

    #[test]
    fn reference_env_uses_tokens_not_values() {
        let creds = CredentialFile::parse("API_KEY=supersecret\nTOKEN=alsosecret\n");
        let env = reference_env(&definition(&["API_KEY", "TOKEN"]), &creds);
        assert_eq!(env.get("API_KEY").unwrap(), "${API_KEY}");
        assert_eq!(env.get("TOKEN").unwrap(), "${TOKEN}");
        for value in env.values() {
            assert!(!value.contains("supersecret"));
            assert!(!value.contains("alsosecret"));
        }
    }

    #[test]
    fn reference_env_is_restricted_to_declared_keys() {
        let creds = CredentialFile::parse("API_KEY=a\nUNRELATED=b\n");
        let env = reference_env(&definition(&["API_KEY"]), &creds);
        assert_eq!(env.len(), 1);
        assert!(!env.contains_key("UNRELATED"));
    }

    #[test]
    fn reference_env_skips_keys_absent_from_file() {
        let creds = CredentialFile::parse("API_KEY=a\n");
        let env = reference_env(&definition(&["API_KEY", "NOT_SET"]), &creds);
        assert_eq!(env.len(), 1);
        assert!(env.contains_key("API_KEY"));
    }
}
