//! In-memory model of the host page.
//!
//! The shell has four surfaces to keep in sync: tagged element text,
//! language-button active state, the document root language attribute,
//! and the embedded frame's URL. Modeling them as plain data makes every
//! controller testable without a browser. Serde derives exist so the
//! binary can emit the final page state as JSON.

use serde::{Deserialize, Serialize};
use url::Url;

/// A UI element marked for text replacement by language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedElement {
    /// Translation key carried by the element
    pub key: String,
    /// Currently displayed text
    pub text: String,
}

/// A language-selector button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageButton {
    /// Language code the button selects
    pub code: String,
    /// Whether the button carries the active visual state
    pub active: bool,
    /// Pixel size applied to the button's icon, once sized at startup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<u32>,
}

/// An ordered, duplicate-free list of CSS classes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> ClassList {
        ClassList::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Add a class; adding an already-present class is a no-op.
    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.0.push(class.to_string());
        }
    }

    /// Remove a class; removing an absent class is a no-op.
    pub fn remove(&mut self, class: &str) {
        self.0.retain(|c| c != class);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The navigation container the visibility machine toggles markers on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavBar {
    pub classes: ClassList,
}

/// The embedded application frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddedFrame {
    /// Frame address; reassigned whenever the language changes
    pub src: Url,
}

impl EmbeddedFrame {
    pub fn new(src: Url) -> EmbeddedFrame {
        EmbeddedFrame { src }
    }

    /// Set or overwrite the `lang` query parameter, preserving every
    /// other parameter. Reassigning the address is what makes the host
    /// environment reload the embedded application.
    pub fn set_lang_param(&mut self, code: &str) {
        let mut url = self.src.clone();
        let others: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(name, _)| name != "lang")
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();

        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (name, value) in &others {
                pairs.append_pair(name, value);
            }
            pairs.append_pair("lang", code);
        }

        self.src = url;
    }

    /// Current value of the `lang` query parameter, if any.
    pub fn lang_param(&self) -> Option<String> {
        self.src
            .query_pairs()
            .find(|(name, _)| name == "lang")
            .map(|(_, value)| value.into_owned())
    }
}

/// The content container holding the embedded frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppContainer {
    pub classes: ClassList,
    pub frame: Option<EmbeddedFrame>,
}

/// The host page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Document root language attribute
    pub root_lang: String,
    pub elements: Vec<TaggedElement>,
    pub buttons: Vec<LanguageButton>,
    pub nav: Option<NavBar>,
    pub app: Option<AppContainer>,
}

impl Page {
    /// An empty page with the given root language attribute.
    pub fn new(root_lang: impl Into<String>) -> Page {
        Page {
            root_lang: root_lang.into(),
            elements: Vec::new(),
            buttons: Vec::new(),
            nav: None,
            app: None,
        }
    }

    pub fn add_element(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.elements.push(TaggedElement {
            key: key.into(),
            text: text.into(),
        });
    }

    pub fn add_button(&mut self, code: impl Into<String>) {
        self.buttons.push(LanguageButton {
            code: code.into(),
            active: false,
            icon_size: None,
        });
    }

    pub fn with_nav(&mut self) {
        self.nav = Some(NavBar::default());
    }

    pub fn with_app(&mut self, frame: Option<EmbeddedFrame>) {
        self.app = Some(AppContainer {
            classes: ClassList::new(),
            frame,
        });
    }

    /// Text of the first element carrying `key`.
    pub fn element_text(&self, key: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|el| el.key == key)
            .map(|el| el.text.as_str())
    }

    /// All buttons currently in the active state.
    pub fn active_buttons(&self) -> Vec<&LanguageButton> {
        self.buttons.iter().filter(|btn| btn.active).collect()
    }

    pub fn frame(&self) -> Option<&EmbeddedFrame> {
        self.app.as_ref().and_then(|app| app.frame.as_ref())
    }

    pub fn frame_mut(&mut self) -> Option<&mut EmbeddedFrame> {
        self.app.as_mut().and_then(|app| app.frame.as_mut())
    }
}
