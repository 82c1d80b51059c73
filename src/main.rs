use anyhow::Result;
use tracing::{info, warn};

use aplab_shell::config::Config;
use aplab_shell::i18n::{
    CatalogValidator, Language, LanguageRegistry, TranslationCatalog, TranslationMetrics,
};
use aplab_shell::icons::IconInitializer;
use aplab_shell::page::{EmbeddedFrame, Page};
use aplab_shell::prefs::PreferenceStore;
use aplab_shell::runtime::{self, PageEvent, ShellRuntime};
use aplab_shell::switcher::LanguageSwitcher;

fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("aplab_shell=info".parse()?),
        )
        .init();

    runtime::install_error_hook();

    info!("Starting aplab shell bootstrap");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Surface catalog gaps before anything renders
    let report = CatalogValidator::validate();
    for error in &report.errors {
        warn!("Catalog: {}", error);
    }
    for warning in &report.warnings {
        warn!("Catalog: {}", warning);
    }
    if report.is_clean() {
        info!("Translation catalog is complete");
    }

    let store = match &config.preference_file {
        Some(path) => PreferenceStore::new(path),
        None => PreferenceStore::default_location()?,
    };
    info!("Using preference file {}", store.path().display());

    let page = build_landing_page(&config);
    let switcher = LanguageSwitcher::new(store, Language::new(&config.default_language));

    // Headless run: no icon script is loaded
    let mut shell = ShellRuntime::new(page, switcher, IconInitializer::without_library());

    shell.start();
    shell.handle_event(PageEvent::FrameLoaded);
    shell.handle_event(PageEvent::WindowLoaded);

    info!("Shell ready in language '{}'", shell.switcher().current());
    info!(
        "Lookup coverage: {:.1}%",
        TranslationMetrics::global().report().lookup_coverage
    );

    // Final page state for inspection
    println!("{}", serde_json::to_string_pretty(shell.page())?);

    Ok(())
}

/// The landing page as shipped: every tagged element starts with its
/// English text, matching the static markup, plus one selector button
/// per offered language, the navigation bar, and the embedded frame.
fn build_landing_page(config: &Config) -> Page {
    let catalog = TranslationCatalog::get();
    let mut page = Page::new("en");

    let mut keys = catalog.keys("en");
    keys.sort_unstable();
    for key in keys {
        if let Some(text) = catalog.lookup("en", key) {
            page.add_element(key, text);
        }
    }

    for language in LanguageRegistry::get().list_enabled() {
        page.add_button(language.code);
    }

    page.with_nav();
    page.with_app(Some(EmbeddedFrame::new(config.streamlit_url.clone())));
    page
}
