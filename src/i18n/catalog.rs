//! Translation catalog: the site's localized display strings.
//!
//! A static mapping of language code → string key → localized text,
//! built once behind a `OnceLock` and never mutated at runtime. Lookup
//! misses (unknown language or unknown key) return `None` so callers can
//! leave existing text untouched.

use std::collections::HashMap;
use std::sync::OnceLock;

type Table = HashMap<&'static str, &'static str>;

/// The full translation catalog for the site.
pub struct TranslationCatalog {
    tables: HashMap<&'static str, Table>,
}

static CATALOG: OnceLock<TranslationCatalog> = OnceLock::new();

impl TranslationCatalog {
    /// Get the global catalog instance, building it on first call.
    pub fn get() -> &'static TranslationCatalog {
        CATALOG.get_or_init(|| TranslationCatalog {
            tables: build_tables(),
        })
    }

    /// Look up the localized text for `key` in the `code` language.
    ///
    /// # Returns
    /// * `Some(text)` when both the language and the key exist
    /// * `None` otherwise; the caller keeps whatever text is already
    ///   on the page
    pub fn lookup(&self, code: &str, key: &str) -> Option<&'static str> {
        self.tables.get(code).and_then(|table| table.get(key)).copied()
    }

    /// Whether a translation table exists for this code.
    pub fn has_language(&self, code: &str) -> bool {
        self.tables.contains_key(code)
    }

    /// Codes of all languages present in the catalog.
    pub fn languages(&self) -> Vec<&'static str> {
        self.tables.keys().copied().collect()
    }

    /// All string keys defined for a language.
    pub fn keys(&self, code: &str) -> Vec<&'static str> {
        self.tables
            .get(code)
            .map(|table| table.keys().copied().collect())
            .unwrap_or_default()
    }
}

/// Key/text pairs per language. Keys are shared across languages; the
/// English set is the reference the validator compares against.
fn build_tables() -> HashMap<&'static str, Table> {
    let mut tables = HashMap::new();
    tables.insert("en", english_table());
    tables.insert("ru", russian_table());
    tables
}

fn english_table() -> Table {
    HashMap::from([
        // Navigation
        ("nav_fundamentals", "Fundamentals"),
        ("nav_basics", "Basics"),
        ("nav_control_flow", "Control Flow"),
        ("nav_data_structures", "Data Structures"),
        // Hero section
        ("hero_title", "Interactive Python Learning"),
        ("hero_subtitle", "Master Python through hands-on practice"),
        // Topics
        ("topic_fundamentals", "Programming Fundamentals"),
        ("topic_basics", "Python Basics"),
        ("topic_control", "Control Flow"),
        ("topic_data", "Data Structures"),
        // Subtopics
        ("sub_programming_basics", "Programming Basics"),
        ("sub_variables", "Variables"),
        ("sub_data_types", "Data Types"),
        ("sub_operations", "Operations"),
        ("sub_conditionals", "Conditionals"),
        ("sub_loops", "Loops"),
        ("sub_functions", "Functions"),
        ("sub_lists", "Lists"),
        ("sub_dictionaries", "Dictionaries"),
        ("sub_sets", "Sets"),
        // Footer
        ("footer_tagline", "Making Python learning interactive"),
        ("footer_rights", "All rights reserved"),
        ("footer_main", "Main Site"),
        ("footer_github", "GitHub"),
    ])
}

fn russian_table() -> Table {
    HashMap::from([
        // Navigation
        ("nav_fundamentals", "Основы"),
        ("nav_basics", "Введение"),
        ("nav_control_flow", "Управление"),
        ("nav_data_structures", "Структуры Данных"),
        // Hero section
        ("hero_title", "Интерактивное Изучение Python"),
        ("hero_subtitle", "Осваивайте Python через практику"),
        // Topics
        ("topic_fundamentals", "Основы Программирования"),
        ("topic_basics", "Введение в Python"),
        ("topic_control", "Управление Потоком"),
        ("topic_data", "Структуры Данных"),
        // Subtopics
        ("sub_programming_basics", "Основы Программирования"),
        ("sub_variables", "Переменные"),
        ("sub_data_types", "Типы Данных"),
        ("sub_operations", "Операции"),
        ("sub_conditionals", "Условные Операторы"),
        ("sub_loops", "Циклы"),
        ("sub_functions", "Функции"),
        ("sub_lists", "Списки"),
        ("sub_dictionaries", "Словари"),
        ("sub_sets", "Множества"),
        // Footer
        ("footer_tagline", "Делаем изучение Python интерактивным"),
        ("footer_rights", "Все права защищены"),
        ("footer_main", "Главный Сайт"),
        ("footer_github", "GitHub"),
    ])
}
