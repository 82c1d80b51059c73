//! Language-switching and navigation shell for the aplab learning site.
//!
//! The site is static; a Streamlit application is embedded in a frame.
//! This crate owns the client-side shell behavior around it:
//!
//! - [`switcher::LanguageSwitcher`] keeps the language selection in sync
//!   across element text, button state, the root language attribute,
//!   the persisted preference, and the frame's `lang` query parameter
//! - [`navigation::NavigationVisibility`] hides and reveals the
//!   navigation bar based on scroll direction
//! - [`icons::IconInitializer`] runs best-effort icon replacement
//! - [`runtime::ShellRuntime`] ties them together behind an explicit,
//!   testable startup sequence and event dispatch

pub mod config;
pub mod i18n;
pub mod icons;
pub mod navigation;
pub mod page;
pub mod prefs;
pub mod runtime;
pub mod switcher;
