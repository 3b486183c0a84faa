#![forbid(unsafe_code)]

//! Application configuration.
//!
//! Every field has a default matching the stock page, so an empty options
//! object (or none at all) yields the standard behavior. The browser host
//! passes options as JSON:
//!
//! ```json
//! { "default_page": "home", "search_debounce_ms": 300 }
//! ```

use core::time::Duration;
use std::fmt;

use collab_core::page::{HOME, PageId};
use collab_core::scroll::{BACK_TO_TOP_THRESHOLD, PARALLAX_RATE, ScrollConfig};
use serde::Deserialize;

/// Default search quiescence window, in milliseconds.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Default storage key of the theme preference.
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

/// Errors from parsing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The options document is not valid JSON for [`AppConfig`].
    Parse(String),
    /// A field has a value outside its domain.
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid options: {msg}"),
            Self::Invalid { field, reason } => write!(f, "invalid option `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Page shown when the fragment is empty or unknown.
    pub default_page: String,
    /// Quiescence window of the student search.
    pub search_debounce_ms: u64,
    /// Scroll offset past which back-to-top is shown.
    pub back_to_top_threshold: f64,
    /// Hero translation per unit of scroll.
    pub parallax_rate: f64,
    /// Storage key of the theme preference.
    pub theme_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_page: HOME.to_owned(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            back_to_top_threshold: BACK_TO_TOP_THRESHOLD,
            parallax_rate: PARALLAX_RATE,
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON options document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field domains.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if PageId::from_fragment(&self.default_page).is_none() {
            return Err(ConfigError::Invalid {
                field: "default_page",
                reason: "must not be empty".into(),
            });
        }
        if self.theme_storage_key.is_empty() {
            return Err(ConfigError::Invalid {
                field: "theme_storage_key",
                reason: "must not be empty".into(),
            });
        }
        if !self.back_to_top_threshold.is_finite() || !self.parallax_rate.is_finite() {
            return Err(ConfigError::Invalid {
                field: "scroll",
                reason: "threshold and rate must be finite".into(),
            });
        }
        Ok(())
    }

    /// Set the default page.
    #[must_use]
    pub fn with_default_page(mut self, page: impl Into<String>) -> Self {
        self.default_page = page.into();
        self
    }

    /// Set the search quiescence window.
    #[must_use]
    pub fn with_search_debounce(mut self, window: Duration) -> Self {
        self.search_debounce_ms = u64::try_from(window.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the storage key of the theme preference.
    #[must_use]
    pub fn with_theme_storage_key(mut self, key: impl Into<String>) -> Self {
        self.theme_storage_key = key.into();
        self
    }

    /// The default page as an id.
    #[must_use]
    pub fn default_page_id(&self) -> PageId {
        PageId::from_fragment(&self.default_page).unwrap_or_else(PageId::home)
    }

    /// The search quiescence window.
    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Scroll tunables.
    #[must_use]
    pub const fn scroll_config(&self) -> ScrollConfig {
        ScrollConfig {
            back_to_top_threshold: self.back_to_top_threshold,
            parallax_rate: self.parallax_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_override() {
        let c = AppConfig::from_json(r##"{"search_debounce_ms": 50, "default_page": "#about"}"##).unwrap();
        assert_eq!(c.search_debounce(), Duration::from_millis(50));
        assert_eq!(c.default_page_id(), PageId::new("about"));
        assert_eq!(c.theme_storage_key, "theme");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = AppConfig::from_json(r#"{"debounce": 10}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn empty_page_is_invalid() {
        let err = AppConfig::from_json(r#"{"default_page": ""}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "default_page", .. }));
    }

    #[test]
    fn builder_setters() {
        let c = AppConfig::default()
            .with_default_page("students")
            .with_search_debounce(Duration::from_millis(120))
            .with_theme_storage_key("collab-theme");
        assert!(c.validate().is_ok());
        assert_eq!(c.search_debounce_ms, 120);
        assert_eq!(c.theme_storage_key, "collab-theme");
    }
}
