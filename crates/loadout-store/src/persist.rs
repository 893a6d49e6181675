// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document reading and staged pair persistence.
//!
//! The two stores are mutated together or not at all: both documents are
//! first serialized to temp files in their target directories, then renamed
//! into place. A failure before the first rename leaves everything
//! untouched; a failure between the renames is reported as `PartialPersist`
//! so the caller knows exactly which store needs manual reconciliation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use loadout_core::LoadoutError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use tracing::debug;

/// Read and parse a JSON document.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, LoadoutError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| LoadoutError::from_io(path.to_path_buf(), e))?;
    serde_json::from_str(&raw).map_err(|e| LoadoutError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// A serialized document staged next to its target, awaiting the rename.
pub struct StagedWrite {
    tmp: NamedTempFile,
    target: PathBuf,
}

impl StagedWrite {
    pub fn target(&self) -> &Path {
        &self.target
    }

    fn commit(self) -> Result<PathBuf, (PathBuf, std::io::Error)> {
        let target = self.target;
        match self.tmp.persist(&target) {
            Ok(_) => Ok(target),
            Err(e) => Err((target, e.error)),
        }
    }
}

/// Serialize `doc` to a temp file in the target's directory.
///
/// Staging in the same directory keeps the final `persist()` a same-filesystem
/// rename, which is atomic.
pub fn stage<T: Serialize>(target: &Path, doc: &T) -> Result<StagedWrite, LoadoutError> {
    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| LoadoutError::from_io(target.to_path_buf(), e))?;

    let json = serde_json::to_string_pretty(doc).map_err(|e| LoadoutError::Unexpected {
        path: target.to_path_buf(),
        source: std::io::Error::other(e),
    })?;

    tmp.write_all(json.as_bytes())
        .and_then(|()| tmp.write_all(b"\n"))
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| LoadoutError::from_io(target.to_path_buf(), e))?;

    Ok(StagedWrite {
        tmp,
        target: target.to_path_buf(),
    })
}

/// Commit two staged writes in order: `first`, then `second`.
///
/// If the first rename fails, neither store has changed. If the second
/// rename fails after the first succeeded, the stores are inconsistent and
/// the error names which path landed and which did not.
pub fn commit_pair(first: StagedWrite, second: StagedWrite) -> Result<(), LoadoutError> {
    let persisted = first
        .commit()
        .map_err(|(path, e)| LoadoutError::from_io(path, e))?;

    match second.commit() {
        Ok(second_target) => {
            debug!(
                first = %persisted.display(),
                second = %second_target.display(),
                "both stores persisted"
            );
            Ok(())
        }
        Err((failed, source)) => Err(LoadoutError::PartialPersist {
            persisted,
            failed,
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::ActivationSettings;

    #[test]
    fn read_missing_document_is_not_found() {
        let err =
            read_document::<ActivationSettings>(Path::new("/nonexistent/settings.json"))
                .unwrap_err();
        assert!(matches!(err, LoadoutError::NotFound { .. }));
    }

    #[test]
    fn read_invalid_json_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{broken").unwrap();
        let err = read_document::<ActivationSettings>(&path).unwrap_err();
        assert!(matches!(err, LoadoutError::Malformed { .. }));
        assert!(err.to_string().contains("settings.json"));
    }

    #[test]
    fn commit_pair_writes_both_documents() {
        let dir = tempfile::tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");
        let runtime_path = dir.path().join("runtime.json");

        let settings = ActivationSettings {
            enabled: vec!["search".to_string()],
            ..Default::default()
        };
        let runtime = serde_json::json!({"mcpServers": {}});

        let first = stage(&settings_path, &settings).unwrap();
        let second = stage(&runtime_path, &runtime).unwrap();
        commit_pair(first, second).unwrap();

        let read_back: ActivationSettings = read_document(&settings_path).unwrap();
        assert_eq!(read_back.enabled, vec!["search"]);
        assert!(runtime_path.exists());
    }

    #[test]
    fn staging_alone_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"enabledMcpjsonServers": ["old"]}"#).unwrap();

        let staged = stage(&path, &ActivationSettings::default()).unwrap();
        drop(staged);

        let read_back: ActivationSettings = read_document(&path).unwrap();
        assert_eq!(read_back.enabled, vec!["old"]);
    }

    #[test]
    fn output_is_pretty_printed_with_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        let a = stage(&path, &serde_json::json!({"k": [1, 2]})).unwrap();
        let b = stage(&dir.path().join("other.json"), &serde_json::json!({})).unwrap();
        commit_pair(a, b).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n  \"k\""));
        assert!(raw.ends_with('\n'));
    }

    #[test]
    fn second_commit_failure_is_partial_persist() {
        let dir = tempfile::tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");
        // The second target is an existing directory, so the rename must fail.
        let runtime_path = dir.path().join("runtime.json");
        fs::create_dir(&runtime_path).unwrap();

        let first = stage(&settings_path, &ActivationSettings::default()).unwrap();
        let second = stage(&runtime_path, &serde_json::json!({})).unwrap();

        let err = commit_pair(first, second).unwrap_err();
        match err {
            LoadoutError::PartialPersist { persisted, failed, .. } => {
                assert_eq!(persisted, settings_path);
                assert_eq!(failed, runtime_path);
            }
            other => panic!("expected PartialPersist, got {other:?}"),
        }
        // The first store did land.
        assert!(settings_path.is_file());
    }
}
