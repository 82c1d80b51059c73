//! Shell runtime: ordered startup and page-event dispatch.
//!
//! Startup is an explicit ordered sequence rather than a set of
//! implicitly-registered load handlers, so the whole boot path runs
//! (and is tested) without any host environment. Anything that would
//! arrive as a browser event comes in as a [`PageEvent`] value.

use crate::icons::IconInitializer;
use crate::navigation::NavigationVisibility;
use crate::page::Page;
use crate::switcher::LanguageSwitcher;
use std::time::Instant;
use tracing::{info, warn};

/// Marker class on the app container while the embed is loading.
pub const LOADING_CLASS: &str = "loading";

/// Pixel size applied to language-button icons at startup.
const BUTTON_ICON_SIZE: u32 = 16;

/// Host-environment events the shell reacts to after startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// Vertical scroll to the given offset
    Scroll(f64),
    /// The embedded frame finished loading
    FrameLoaded,
    /// The full page (scripts included) finished loading
    WindowLoaded,
}

pub struct ShellRuntime {
    page: Page,
    switcher: LanguageSwitcher,
    navigation: NavigationVisibility,
    icons: IconInitializer,
    started_at: Instant,
}

impl ShellRuntime {
    pub fn new(
        page: Page,
        switcher: LanguageSwitcher,
        icons: IconInitializer,
    ) -> ShellRuntime {
        ShellRuntime {
            page,
            switcher,
            navigation: NavigationVisibility::new(),
            icons,
            started_at: Instant::now(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn switcher(&self) -> &LanguageSwitcher {
        &self.switcher
    }

    pub fn navigation(&self) -> &NavigationVisibility {
        &self.navigation
    }

    /// Run the startup sequence:
    /// 1. warn about missing optional page parts
    /// 2. size the language-button icons
    /// 3. initialize the language from the stored preference
    /// 4. mark the app container as loading
    /// 5. run icon replacement
    pub fn start(&mut self) {
        if self.page.buttons.is_empty() {
            warn!("Language buttons not found");
        }
        if self.page.nav.is_none() {
            warn!("Navigation container not found");
        }

        for button in &mut self.page.buttons {
            button.icon_size = Some(BUTTON_ICON_SIZE);
        }

        self.switcher.init(&mut self.page);

        if let Some(app) = self.page.app.as_mut() {
            app.classes.add(LOADING_CLASS);
        }

        self.icons.replace_icons();
    }

    /// Switch the active language (a selector button was pressed).
    pub fn set_language(&mut self, code: &str) {
        self.switcher.set_language(&mut self.page, code);
    }

    pub fn handle_event(&mut self, event: PageEvent) {
        match event {
            PageEvent::Scroll(offset) => {
                self.navigation.on_scroll(&mut self.page, offset);
            }
            PageEvent::FrameLoaded => {
                if let Some(app) = self.page.app.as_mut() {
                    app.classes.remove(LOADING_CLASS);
                }
            }
            PageEvent::WindowLoaded => {
                // Covers an icon script that finished loading after
                // startup but before the window-load event
                self.icons.replace_icons();
                info!(
                    "Page load complete in {} ms",
                    self.started_at.elapsed().as_millis()
                );
            }
        }
    }
}

/// Process-wide fallback: log unhandled panics as warnings instead of
/// letting them pass silently. Installed by the binary only, so test
/// harnesses keep their default panic output.
pub fn install_error_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        warn!("Unhandled error: {}", panic_info);
    }));
}
