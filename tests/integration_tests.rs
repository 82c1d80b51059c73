//! Integration tests for the aplab shell.
//!
//! These tests exercise the interaction between modules: the full
//! startup sequence, language switching across simulated page reloads,
//! scroll-driven navigation, and degraded icon initialization.

use std::cell::Cell;
use std::rc::Rc;

use tempfile::TempDir;
use url::Url;

use aplab_shell::i18n::Language;
use aplab_shell::icons::{IconInitializer, IconLibrary, IconOptions};
use aplab_shell::navigation::{NavState, SCROLL_DOWN_CLASS, SCROLL_UP_CLASS};
use aplab_shell::page::{EmbeddedFrame, Page};
use aplab_shell::prefs::PreferenceStore;
use aplab_shell::runtime::{PageEvent, ShellRuntime, LOADING_CLASS};
use aplab_shell::switcher::LanguageSwitcher;

// ==================== Test Helpers ====================

/// Build the page the way the site ships it: English text, one button
/// per offered language, navigation bar, embedded frame.
fn landing_page() -> Page {
    let mut page = Page::new("en");
    page.add_element("hero_title", "Interactive Python Learning");
    page.add_element("hero_subtitle", "Master Python through hands-on practice");
    page.add_element("nav_basics", "Basics");
    page.add_element("footer_rights", "All rights reserved");
    page.add_button("en");
    page.add_button("ru");
    page.with_nav();
    page.with_app(Some(EmbeddedFrame::new(
        Url::parse("http://localhost:8501/?embed=true").expect("frame url"),
    )));
    page
}

fn shell_with_store(temp_dir: &TempDir, icons: IconInitializer) -> ShellRuntime {
    let store = PreferenceStore::new(temp_dir.path().join("language.json"));
    let switcher = LanguageSwitcher::new(store, Language::new("en"));
    ShellRuntime::new(landing_page(), switcher, icons)
}

/// Assert the four-surface invariant: store, root attribute, active
/// button (when one is offered for the code), and frame parameter all
/// agree on `code`.
fn assert_surfaces_agree(temp_dir: &TempDir, shell: &ShellRuntime, code: &str) {
    let page = shell.page();
    assert_eq!(page.root_lang, code);
    assert_eq!(page.frame().unwrap().lang_param().as_deref(), Some(code));

    let store = PreferenceStore::new(temp_dir.path().join("language.json"));
    let stored = store.load().expect("load").expect("preference present");
    assert_eq!(stored.language, code);
}

struct FailingLibrary;

impl IconLibrary for FailingLibrary {
    fn replace(&self, _options: &IconOptions) -> anyhow::Result<()> {
        anyhow::bail!("icon renderer failed")
    }
}

struct CountingLibrary {
    calls: Rc<Cell<u32>>,
}

impl IconLibrary for CountingLibrary {
    fn replace(&self, _options: &IconOptions) -> anyhow::Result<()> {
        self.calls.set(self.calls.get() + 1);
        Ok(())
    }
}

// ==================== Startup Sequence Tests ====================

#[test]
fn test_startup_applies_default_language_everywhere() {
    let temp_dir = TempDir::new().expect("temp dir");
    let mut shell = shell_with_store(&temp_dir, IconInitializer::without_library());

    shell.start();

    assert_surfaces_agree(&temp_dir, &shell, "en");

    let active = shell.page().active_buttons();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].code, "en");

    // Element text stays English
    assert_eq!(
        shell.page().element_text("hero_title"),
        Some("Interactive Python Learning")
    );

    // Container is loading until the frame reports in
    assert!(shell.page().app.as_ref().unwrap().classes.contains(LOADING_CLASS));
}

#[test]
fn test_startup_picks_up_persisted_preference() {
    let temp_dir = TempDir::new().expect("temp dir");

    // First visit: switch to Russian
    {
        let mut shell = shell_with_store(&temp_dir, IconInitializer::without_library());
        shell.start();
        shell.set_language("ru");
    }

    // Simulated reload: a fresh runtime over the same store
    let mut shell = shell_with_store(&temp_dir, IconInitializer::without_library());
    shell.start();

    assert_surfaces_agree(&temp_dir, &shell, "ru");
    assert_eq!(
        shell.page().element_text("hero_title"),
        Some("Интерактивное Изучение Python")
    );
    let active = shell.page().active_buttons();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].code, "ru");
}

#[test]
fn test_frame_load_clears_loading_marker() {
    let temp_dir = TempDir::new().expect("temp dir");
    let mut shell = shell_with_store(&temp_dir, IconInitializer::without_library());

    shell.start();
    shell.handle_event(PageEvent::FrameLoaded);

    assert!(!shell.page().app.as_ref().unwrap().classes.contains(LOADING_CLASS));
}

// ==================== Language Switching Tests ====================

#[test]
fn test_switch_cycle_en_ru_en() {
    let temp_dir = TempDir::new().expect("temp dir");
    let mut shell = shell_with_store(&temp_dir, IconInitializer::without_library());
    shell.start();

    shell.set_language("ru");
    assert_surfaces_agree(&temp_dir, &shell, "ru");
    assert_eq!(shell.page().element_text("nav_basics"), Some("Введение"));

    shell.set_language("en");
    assert_surfaces_agree(&temp_dir, &shell, "en");
    assert_eq!(shell.page().element_text("nav_basics"), Some("Basics"));
    assert_eq!(
        shell.page().element_text("footer_rights"),
        Some("All rights reserved")
    );
}

#[test]
fn test_switch_is_idempotent() {
    let temp_dir = TempDir::new().expect("temp dir");
    let mut shell = shell_with_store(&temp_dir, IconInitializer::without_library());
    shell.start();

    shell.set_language("ru");
    let first = serde_json::to_string(shell.page()).expect("serialize");

    shell.set_language("ru");
    let second = serde_json::to_string(shell.page()).expect("serialize");

    assert_eq!(first, second);
}

#[test]
fn test_unknown_language_updates_everything_but_text() {
    let temp_dir = TempDir::new().expect("temp dir");
    let mut shell = shell_with_store(&temp_dir, IconInitializer::without_library());
    shell.start();

    shell.set_language("fr");

    // Text keeps its previous (English) content
    assert_eq!(
        shell.page().element_text("hero_title"),
        Some("Interactive Python Learning")
    );

    // Store, root attribute, and frame still follow the code
    assert_surfaces_agree(&temp_dir, &shell, "fr");

    // No offered button matches, so none is active
    assert!(shell.page().active_buttons().is_empty());
}

#[test]
fn test_frame_query_parameters_survive_switching() {
    let temp_dir = TempDir::new().expect("temp dir");
    let mut shell = shell_with_store(&temp_dir, IconInitializer::without_library());
    shell.start();

    shell.set_language("ru");
    shell.set_language("en");

    let frame = shell.page().frame().unwrap();
    let pairs: Vec<(String, String)> = frame
        .src
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    // The pre-existing embed parameter is intact and lang appears once
    assert!(pairs.contains(&("embed".into(), "true".into())));
    assert_eq!(pairs.iter().filter(|(k, _)| k == "lang").count(), 1);
    assert!(pairs.contains(&("lang".into(), "en".into())));
}

// ==================== Navigation Tests ====================

#[test]
fn test_scroll_events_toggle_markers_through_runtime() {
    let temp_dir = TempDir::new().expect("temp dir");
    let mut shell = shell_with_store(&temp_dir, IconInitializer::without_library());
    shell.start();

    shell.handle_event(PageEvent::Scroll(50.0));
    assert_eq!(shell.navigation().state(), NavState::Down);
    assert!(shell.page().nav.as_ref().unwrap().classes.contains(SCROLL_DOWN_CLASS));

    shell.handle_event(PageEvent::Scroll(30.0));
    assert_eq!(shell.navigation().state(), NavState::Up);
    assert!(shell.page().nav.as_ref().unwrap().classes.contains(SCROLL_UP_CLASS));

    shell.handle_event(PageEvent::Scroll(0.0));
    assert_eq!(shell.navigation().state(), NavState::Up);
    assert!(shell.page().nav.as_ref().unwrap().classes.is_empty());
}

#[test]
fn test_scrolling_does_not_disturb_language_surfaces() {
    let temp_dir = TempDir::new().expect("temp dir");
    let mut shell = shell_with_store(&temp_dir, IconInitializer::without_library());
    shell.start();
    shell.set_language("ru");

    for offset in [10.0, 120.0, 80.0, 0.0, 35.0] {
        shell.handle_event(PageEvent::Scroll(offset));
    }

    assert_surfaces_agree(&temp_dir, &shell, "ru");
}

// ==================== Icon Initialization Tests ====================

#[test]
fn test_missing_icon_library_leaves_page_functional() {
    let temp_dir = TempDir::new().expect("temp dir");
    let mut shell = shell_with_store(&temp_dir, IconInitializer::without_library());

    shell.start();
    shell.handle_event(PageEvent::WindowLoaded);
    shell.set_language("ru");

    assert_surfaces_agree(&temp_dir, &shell, "ru");
}

#[test]
fn test_failing_icon_library_leaves_page_functional() {
    let temp_dir = TempDir::new().expect("temp dir");
    let mut shell = shell_with_store(
        &temp_dir,
        IconInitializer::new(Some(Box::new(FailingLibrary))),
    );

    shell.start();
    shell.handle_event(PageEvent::WindowLoaded);
    shell.set_language("ru");

    assert_surfaces_agree(&temp_dir, &shell, "ru");
}

#[test]
fn test_icon_replacement_runs_at_startup_and_window_load() {
    let temp_dir = TempDir::new().expect("temp dir");
    let calls = Rc::new(Cell::new(0));
    let mut shell = shell_with_store(
        &temp_dir,
        IconInitializer::new(Some(Box::new(CountingLibrary {
            calls: Rc::clone(&calls),
        }))),
    );

    shell.start();
    shell.handle_event(PageEvent::WindowLoaded);

    assert_eq!(calls.get(), 2);
}

// ==================== Preference File Tests ====================

#[test]
fn test_preference_file_shape() {
    let temp_dir = TempDir::new().expect("temp dir");
    let mut shell = shell_with_store(&temp_dir, IconInitializer::without_library());
    shell.start();
    shell.set_language("ru");

    let content =
        std::fs::read_to_string(temp_dir.path().join("language.json")).expect("read");
    let value: serde_json::Value = serde_json::from_str(&content).expect("json");

    assert_eq!(value["language"], "ru");
    assert!(value["updated_at"].is_string());
}

#[test]
fn test_corrupt_preference_file_falls_back_to_default() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("language.json");
    std::fs::write(&path, "{{{{").expect("write garbage");

    let mut shell = shell_with_store(&temp_dir, IconInitializer::without_library());
    shell.start();

    // Default applied and the broken file replaced with a valid one
    assert_eq!(shell.page().root_lang, "en");
    let store = PreferenceStore::new(&path);
    assert_eq!(store.load().expect("load").expect("present").language, "en");
}
