//! Language registry: metadata for the languages the site offers.
//!
//! The registry is a lazily-initialized singleton (`OnceLock`) holding
//! display metadata for each offered language. It is deliberately
//! metadata-only: `set_language` accepts any code, so absence from the
//! registry never blocks a switch; it only means no display names are
//! available.

use std::sync::OnceLock;

/// Metadata for an offered language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "ru")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Russian")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Русский")
    pub native_name: &'static str,

    /// Whether this is the default language applied when no preference
    /// has been persisted yet (exactly one should be true)
    pub is_default: bool,

    /// Whether a selector button is offered for this language
    pub enabled: bool,
}

/// Registry of offered languages.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global registry instance, initializing it on first call.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: offered_languages(),
        })
    }

    /// Look up a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the code is registered
    /// * `None` for any other code (which is still a switchable code)
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All languages a selector button is offered for.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// The default language, applied when no preference is stored.
    ///
    /// # Panics
    /// Panics if zero or multiple default languages are configured,
    /// which indicates a broken registry definition.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Whether a selector button is offered for this code.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// The languages the site ships with.
fn offered_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            is_default: false,
            enabled: true,
        },
    ]
}
