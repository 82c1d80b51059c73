//! Catalog completeness validation.
//!
//! Compares every non-default language's key set against the default
//! language's. A missing translation only degrades to untouched text at
//! runtime, so the validator is the one place where gaps become visible:
//! the binary runs it at startup and logs the report.

use crate::i18n::{LanguageRegistry, TranslationCatalog};

/// Validation report containing errors and warnings about the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make a language unusable (no table at all)
    pub errors: Vec<String>,

    /// Per-key gaps that degrade to untouched text
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation catalog completeness.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate the global catalog against the global registry.
    pub fn validate() -> ValidationReport {
        Self::validate_with(TranslationCatalog::get(), LanguageRegistry::get())
    }

    /// Validate a catalog against a registry.
    ///
    /// Checks that:
    /// - every enabled registry language has a translation table
    /// - every non-default language defines every key the default
    ///   language defines (missing keys fall back to existing text)
    /// - no non-default language defines keys the default one lacks
    ///   (orphaned keys are never rendered)
    pub fn validate_with(
        catalog: &TranslationCatalog,
        registry: &LanguageRegistry,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        let default_code = registry.default_language().code;
        let mut reference_keys = catalog.keys(default_code);
        reference_keys.sort_unstable();

        for language in registry.list_enabled() {
            if !catalog.has_language(language.code) {
                report.errors.push(format!(
                    "Language '{}' is offered but has no translation table",
                    language.code
                ));
                continue;
            }

            if language.code == default_code {
                continue;
            }

            let mut keys = catalog.keys(language.code);
            keys.sort_unstable();

            for key in &reference_keys {
                if !keys.contains(key) {
                    report.warnings.push(format!(
                        "Language '{}' is missing key '{}'",
                        language.code, key
                    ));
                }
            }

            for key in &keys {
                if !reference_keys.contains(key) {
                    report.warnings.push(format!(
                        "Language '{}' defines key '{}' absent from '{}'",
                        language.code, key, default_code
                    ));
                }
            }
        }

        report
    }
}
