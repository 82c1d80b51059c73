//! Language type: an owned, permissive language code.
//!
//! Any string is a valid `Language`. Unknown codes are accepted on
//! purpose: the page keeps working, text replacement is silently
//! skipped, and a future language can be added to the catalog without
//! touching switching logic. Registry metadata is therefore exposed as
//! `Option` instead of being a construction-time guarantee.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A language selected by the user or read from the preference store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language {
    code: String,
}

impl Language {
    /// Create a language from any code. No validation is performed.
    pub fn new(code: impl Into<String>) -> Language {
        Language { code: code.into() }
    }

    /// The default language from the registry (English).
    pub fn default_language() -> Language {
        Language::new(LanguageRegistry::get().default_language().code)
    }

    /// The language code as given (e.g., "en", "ru").
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Registry metadata for this code, if it is a registered language.
    pub fn config(&self) -> Option<&'static LanguageConfig> {
        LanguageRegistry::get().get_by_code(&self.code)
    }

    /// Whether this code is registered with display metadata.
    pub fn is_known(&self) -> bool {
        self.config().is_some()
    }

    /// English name of the language, if registered.
    pub fn name(&self) -> Option<&'static str> {
        self.config().map(|config| config.name)
    }

    /// Native name of the language, if registered.
    pub fn native_name(&self) -> Option<&'static str> {
        self.config().map(|config| config.native_name)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Language {
        Language::new(code)
    }
}
