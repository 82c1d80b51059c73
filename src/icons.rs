//! Best-effort icon initialization.
//!
//! The icon-rendering library is an external script that may not have
//! loaded at all, so it is modeled as an optional capability handle
//! rather than an assumed global. Replacement never fails the shell:
//! an absent library is skipped and a throwing library is logged.

use anyhow::Result;
use tracing::{debug, warn};

/// Fixed options passed to the library's replace operation.
#[derive(Debug, Clone, PartialEq)]
pub struct IconOptions {
    pub width: u32,
    pub height: u32,
    pub stroke_width: f32,
    /// Class stamped on every rendered icon for styling hooks
    pub class: &'static str,
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            width: 24,
            height: 24,
            stroke_width: 2.0,
            class: "feather-icon",
        }
    }
}

/// The external icon-rendering capability.
pub trait IconLibrary {
    /// Replace icon placeholders with rendered icons.
    fn replace(&self, options: &IconOptions) -> Result<()>;
}

/// Invokes the icon library if one is present.
pub struct IconInitializer {
    library: Option<Box<dyn IconLibrary>>,
    options: IconOptions,
}

impl IconInitializer {
    pub fn new(library: Option<Box<dyn IconLibrary>>) -> IconInitializer {
        IconInitializer {
            library,
            options: IconOptions::default(),
        }
    }

    /// An initializer with no library loaded; every call is a no-op.
    pub fn without_library() -> IconInitializer {
        IconInitializer::new(None)
    }

    /// Run icon replacement. Absence and failure both degrade:
    /// nothing propagates to the caller.
    pub fn replace_icons(&self) {
        match &self.library {
            None => debug!("Icon library not loaded, skipping icon replacement"),
            Some(library) => {
                if let Err(e) = library.replace(&self.options) {
                    warn!("Icon replacement failed: {:#}", e);
                }
            }
        }
    }
}
