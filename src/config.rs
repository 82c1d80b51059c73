use anyhow::{Context, Result};
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    // Preference store
    pub preference_file: Option<String>,

    // Language applied when no preference has been persisted
    pub default_language: String,

    // Embedded Streamlit application
    pub streamlit_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let streamlit_url = std::env::var("STREAMLIT_URL")
            .unwrap_or_else(|_| "http://localhost:8501/".to_string());

        Ok(Self {
            // Explicit path override for the preference file
            preference_file: std::env::var("PREFERENCE_FILE").ok(),

            default_language: std::env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),

            streamlit_url: Url::parse(&streamlit_url)
                .with_context(|| format!("STREAMLIT_URL is not a valid URL: {}", streamlit_url))?,
        })
    }
}
