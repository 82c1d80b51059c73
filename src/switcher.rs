//! Language preference controller.
//!
//! Owns the current language selection and propagates every change to
//! the four dependent surfaces in one synchronous cycle: the preference
//! store, tagged element text, button active state, the root language
//! attribute, and the embedded frame's `lang` parameter. The cycle never
//! fails; faults degrade to warnings and the remaining surfaces still
//! update.

use crate::i18n::{Language, TranslationCatalog, TranslationMetrics};
use crate::page::Page;
use crate::prefs::PreferenceStore;
use tracing::{debug, warn};

pub struct LanguageSwitcher {
    current: Language,
    default_language: Language,
    store: PreferenceStore,
}

impl LanguageSwitcher {
    pub fn new(store: PreferenceStore, default_language: Language) -> LanguageSwitcher {
        LanguageSwitcher {
            current: default_language.clone(),
            default_language,
            store,
        }
    }

    /// The currently applied language.
    pub fn current(&self) -> &Language {
        &self.current
    }

    /// Read the persisted preference and apply it.
    ///
    /// Applies the default language when nothing is stored or the file
    /// is unreadable. Re-persists whatever it applies, so a first run
    /// leaves a stored preference behind.
    pub fn init(&mut self, page: &mut Page) {
        let code = match self.store.load() {
            Ok(Some(stored)) => stored.language,
            Ok(None) => self.default_language.code().to_string(),
            Err(e) => {
                warn!(
                    "Could not read language preference, using default: {}",
                    e
                );
                self.default_language.code().to_string()
            }
        };

        debug!("Language initialized: {}", code);
        self.set_language(page, &code);
    }

    /// Apply `code` to every surface. Accepts any code: an unknown one
    /// still updates the store, buttons, root attribute, and frame;
    /// only text replacement finds nothing and skips.
    pub fn set_language(&mut self, page: &mut Page, code: &str) {
        // In-memory selection
        self.current = Language::new(code);

        // Persisted preference
        if let Err(e) = self.store.save(code) {
            warn!("Could not persist language preference: {}", e);
        }

        // Tagged element text; misses leave existing text untouched
        let catalog = TranslationCatalog::get();
        let metrics = TranslationMetrics::global();
        for element in &mut page.elements {
            match catalog.lookup(code, &element.key) {
                Some(text) => {
                    element.text = text.to_string();
                    metrics.record_lookup_hit();
                }
                None => metrics.record_lookup_miss(),
            }
        }

        // Button active state
        for button in &mut page.buttons {
            button.active = button.code == code;
        }

        // Root language attribute
        page.root_lang = code.to_string();

        // Embedded frame parameter
        if let Some(frame) = page.frame_mut() {
            frame.set_lang_param(code);
        }

        debug!("Language changed to: {}", code);
    }
}
