//! Persisted language preference.
//!
//! A single key-value pair that survives page reloads: the last-selected
//! language code plus the time it was written. Stored as a small JSON
//! document, by default under the platform data directory for "aplab".
//! Read once at startup, written on every language change.

use crate::i18n::TranslationMetrics;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name used under the default data directory.
const PREFERENCE_FILE_NAME: &str = "language.json";

/// Errors from the preference store. Callers on the switching path
/// degrade these to warnings; only setup code propagates them.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("could not determine a data directory for the language preference")]
    NoDataDir,

    #[error("failed to read preference file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("preference file {path} is not valid JSON")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write preference file {path}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The persisted record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPreference {
    /// Last-selected language code
    pub language: String,
    /// When the preference was last written
    pub updated_at: DateTime<Utc>,
}

/// File-backed store for the language preference.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// A store backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> PreferenceStore {
        PreferenceStore { path: path.into() }
    }

    /// A store at the platform default location
    /// (data directory for "aplab" + `language.json`).
    pub fn default_location() -> Result<PreferenceStore, PrefsError> {
        let dirs = ProjectDirs::from("", "", "aplab").ok_or(PrefsError::NoDataDir)?;
        Ok(PreferenceStore::new(
            dirs.data_dir().join(PREFERENCE_FILE_NAME),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored preference.
    ///
    /// # Returns
    /// * `Ok(None)` when no preference has ever been written
    /// * `Ok(Some(..))` with the stored record
    /// * `Err` on unreadable or corrupt files (callers treat this as
    ///   absent, with a warning)
    pub fn load(&self) -> Result<Option<StoredPreference>, PrefsError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|source| {
            TranslationMetrics::global().record_store_failure();
            PrefsError::Read {
                path: self.path.display().to_string(),
                source,
            }
        })?;

        let stored = serde_json::from_str(&content).map_err(|source| {
            TranslationMetrics::global().record_store_failure();
            PrefsError::Parse {
                path: self.path.display().to_string(),
                source,
            }
        })?;

        Ok(Some(stored))
    }

    /// Write `code` as the current preference, creating parent
    /// directories as needed.
    pub fn save(&self, code: &str) -> Result<(), PrefsError> {
        let record = StoredPreference {
            language: code.to_string(),
            updated_at: Utc::now(),
        };

        let write = || -> std::io::Result<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(&record)
                .expect("preference record is always serializable");
            fs::write(&self.path, content)
        };

        match write() {
            Ok(()) => {
                TranslationMetrics::global().record_store_write();
                Ok(())
            }
            Err(source) => {
                TranslationMetrics::global().record_store_failure();
                Err(PrefsError::Write {
                    path: self.path.display().to_string(),
                    source,
                })
            }
        }
    }
}
