// SPDX-License-Identifier: GPL-3.0-only

//! Persisted language preference.
//!
//! A single JSON file holding the `lang` key, read once at startup and
//! written on every language switch. A missing or corrupt file falls back to
//! the default language; only write failures surface an error.

use crate::layout::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Wire shape of the preference file.
#[derive(Debug, Serialize, Deserialize)]
struct PrefsFile {
    lang: Language,
}

/// Error type for preference persistence.
#[derive(Debug)]
pub enum PrefsError {
    /// Failed to write the preference file.
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
    /// Failed to encode the preference payload.
    Json { source: serde_json::Error },
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefsError::Io { source, path } => {
                write!(
                    f,
                    "failed to write preferences to '{}': {source}",
                    path.display()
                )
            }
            PrefsError::Json { source } => write!(f, "failed to encode preferences: {source}"),
        }
    }
}

impl std::error::Error for PrefsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrefsError::Io { source, .. } => Some(source),
            PrefsError::Json { source } => Some(source),
        }
    }
}

/// File-backed store for the language preference.
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    /// A store backed by the given file path. The file need not exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted language.
    ///
    /// Returns `None` when the file is missing or unreadable as preferences;
    /// a corrupt file is logged and treated as absent.
    #[must_use]
    pub fn load_language(&self) -> Option<Language> {
        let data = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<PrefsFile>(&data) {
            Ok(prefs) => Some(prefs.lang),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "ignoring corrupt preference file"
                );
                None
            }
        }
    }

    /// Writes the language, creating parent directories as needed.
    pub fn store_language(&self, lang: Language) -> Result<(), PrefsError> {
        let payload = serde_json::to_string_pretty(&PrefsFile { lang })
            .map_err(|source| PrefsError::Json { source })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| PrefsError::Io {
                source,
                path: self.path.clone(),
            })?;
        }

        fs::write(&self.path, payload).map_err(|source| PrefsError::Io {
            source,
            path: self.path.clone(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Store then load round-trips the language through the filesystem.
    #[test]
    fn test_store_load_roundtrip() {
        let dir = TempDir::new().expect("temp dir");
        let store = PrefsStore::new(dir.path().join("prefs.json"));

        assert_eq!(store.load_language(), None, "no file yet");

        store.store_language(Language::Ru).expect("store ru");
        assert_eq!(store.load_language(), Some(Language::Ru));

        store.store_language(Language::En).expect("store en");
        assert_eq!(store.load_language(), Some(Language::En));
    }

    /// The file uses the `lang` key with lowercase language codes.
    #[test]
    fn test_file_format() {
        let dir = TempDir::new().expect("temp dir");
        let store = PrefsStore::new(dir.path().join("prefs.json"));

        store.store_language(Language::Ru).expect("store");
        let raw = std::fs::read_to_string(store.path()).expect("read back");

        let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(value["lang"], "ru");
    }

    /// A corrupt file is treated as absent, not an error.
    #[test]
    fn test_corrupt_file_ignored() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json at all").expect("write junk");

        let store = PrefsStore::new(&path);
        assert_eq!(store.load_language(), None);
    }

    /// Missing parent directories are created on store.
    #[test]
    fn test_creates_parent_dirs() {
        let dir = TempDir::new().expect("temp dir");
        let store = PrefsStore::new(dir.path().join("nested/deeper/prefs.json"));

        store.store_language(Language::Ru).expect("store");
        assert_eq!(store.load_language(), Some(Language::Ru));
    }
}
