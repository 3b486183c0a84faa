#![forbid(unsafe_code)]

//! Light/dark theme policy.
//!
//! Three user-visible states are stored as a two-value flag plus absence:
//!
//! | Stored value | Preference | Applied theme |
//! |--------------|------------|---------------|
//! | `"light"` | explicit light | light, OS changes ignored |
//! | `"dark"` | explicit dark | dark, OS changes ignored |
//! | absent | follow OS | tracks every OS change |
//!
//! The only way out of "follow OS" is an explicit toggle.

use std::fmt;

/// Icon shown on the toggle while the light theme is applied.
pub const ICON_DARK_MODE: &str = "dark_mode";

/// Icon shown on the toggle while the dark theme is applied.
pub const ICON_LIGHT_MODE: &str = "light_mode";

/// The applied theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme for an OS dark-scheme flag.
    #[must_use]
    pub const fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle icon offering a switch to the other theme.
    #[must_use]
    pub const fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => ICON_DARK_MODE,
            Self::Dark => ICON_LIGHT_MODE,
        }
    }

    /// Stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemePreference {
    /// Explicitly chosen light.
    Light,
    /// Explicitly chosen dark.
    Dark,
    /// No choice made; follow the OS.
    #[default]
    Unset,
}

impl ThemePreference {
    /// Interpret a stored value.
    ///
    /// Anything other than `"light"` or `"dark"` is treated as absent.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            Some("dark") => Self::Dark,
            _ => Self::Unset,
        }
    }

    /// Explicit preference for a theme.
    #[must_use]
    pub const fn explicit(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }

    /// The explicitly chosen theme, if any.
    #[must_use]
    pub const fn theme(self) -> Option<Theme> {
        match self {
            Self::Light => Some(Theme::Light),
            Self::Dark => Some(Theme::Dark),
            Self::Unset => None,
        }
    }
}

/// Resolves the applied theme from the stored preference and the OS scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemePolicy {
    preference: ThemePreference,
    os_prefers_dark: bool,
}

impl ThemePolicy {
    /// Create a policy at startup.
    #[must_use]
    pub const fn new(preference: ThemePreference, os_prefers_dark: bool) -> Self {
        Self {
            preference,
            os_prefers_dark,
        }
    }

    #[must_use]
    pub const fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Whether OS scheme changes still affect the applied theme.
    #[must_use]
    pub const fn follows_os(&self) -> bool {
        matches!(self.preference, ThemePreference::Unset)
    }

    /// The theme that should be applied right now.
    #[must_use]
    pub const fn applied(&self) -> Theme {
        match self.preference.theme() {
            Some(theme) => theme,
            None => Theme::from_dark(self.os_prefers_dark),
        }
    }

    /// Flip the applied theme and record it as an explicit choice.
    ///
    /// Returns the new theme, which the caller persists.
    pub fn toggle(&mut self) -> Theme {
        let next = self.applied().toggled();
        self.preference = ThemePreference::explicit(next);
        next
    }

    /// Record an OS scheme change.
    ///
    /// Returns the theme to apply when the policy follows the OS, `None`
    /// once an explicit choice has been made.
    pub fn os_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        self.os_prefers_dark = prefers_dark;
        self.follows_os().then(|| self.applied())
    }
}
