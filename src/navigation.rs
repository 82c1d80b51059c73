//! Scroll-driven navigation bar visibility.
//!
//! A two-state machine fed vertical scroll offsets. Scrolling down past
//! the top hides the bar, scrolling back up reveals it, and reaching the
//! top restores the pristine class list. The state lives on the
//! controller; the page only carries the resulting marker classes.

use crate::page::Page;

/// Marker class that slides the bar off screen.
pub const SCROLL_DOWN_CLASS: &str = "scroll-down";
/// Marker class that slides the bar back on screen.
pub const SCROLL_UP_CLASS: &str = "scroll-up";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Up,
    Down,
}

/// The visibility state machine.
#[derive(Debug)]
pub struct NavigationVisibility {
    state: NavState,
    last_offset: f64,
}

impl NavigationVisibility {
    pub fn new() -> NavigationVisibility {
        NavigationVisibility {
            state: NavState::Up,
            last_offset: 0.0,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    /// Evaluate one scroll event against the previous offset.
    ///
    /// A page without a navigation container is skipped entirely; the
    /// startup sequence has already warned about it once.
    pub fn on_scroll(&mut self, page: &mut Page, offset: f64) {
        let Some(nav) = page.nav.as_mut() else {
            return;
        };

        if offset <= 0.0 {
            self.state = NavState::Up;
            nav.classes.remove(SCROLL_DOWN_CLASS);
            nav.classes.remove(SCROLL_UP_CLASS);
            // last_offset is deliberately not recorded at the top
            return;
        }

        if offset > self.last_offset && self.state != NavState::Down {
            self.state = NavState::Down;
            nav.classes.remove(SCROLL_UP_CLASS);
            nav.classes.add(SCROLL_DOWN_CLASS);
        } else if offset < self.last_offset && self.state == NavState::Down {
            self.state = NavState::Up;
            nav.classes.remove(SCROLL_DOWN_CLASS);
            nav.classes.add(SCROLL_UP_CLASS);
        }

        self.last_offset = offset;
    }
}

impl Default for NavigationVisibility {
    fn default() -> Self {
        Self::new()
    }
}
