#![forbid(unsafe_code)]

//! Document hooks the frontend binds to.
//!
//! The page markup is authored by hand; these are the ids, classes and
//! attributes it must carry for each feature. A missing hook disables only
//! the feature that needs it.

use collab_core::event::{NavSet, ThemeToggleSlot};

/// View containers. Each carries its page id as the element id.
pub const PAGE: &str = ".page";
/// Class marking the shown container, the active nav item, and the
/// selected filter button.
pub const ACTIVE_CLASS: &str = "active";

/// Class on the root element while the dark theme is applied.
pub const DARK_CLASS: &str = "dark";

/// Attribute naming a nav item's target page.
pub const DATA_PAGE: &str = "data-page";

/// Mobile menu panel.
pub const MOBILE_MENU_ID: &str = "mobileMenu";
/// Hamburger button opening the mobile menu.
pub const MENU_TOGGLE_ID: &str = "navToggle";
/// Class hiding the mobile menu panel.
pub const HIDDEN_CLASS: &str = "hidden";

pub const STUDENT_GRID_ID: &str = "studentsGrid";
pub const PROJECT_GRID_ID: &str = "projectsGrid";
pub const STUDENT_CARD: &str = ".student-card";
pub const PROJECT_CARD: &str = ".project-card";
/// Attribute carrying a card's position in its list.
pub const DATA_INDEX: &str = "data-index";

pub const SEARCH_INPUT_ID: &str = "studentSearch";
pub const FILTER_BUTTON: &str = ".filter-btn";
pub const DATA_FILTER: &str = "data-filter";

pub const PROGRESS_BAR: &str = ".scroll-progress-bar";
pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const VISIBLE_CLASS: &str = "visible";
pub const HERO: &str = ".hero-section";

/// In-page anchors that scroll to their target instead of jumping.
pub const IN_PAGE_ANCHOR: &str = "a[href^=\"#\"]";

/// OS color-scheme media query.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Selector of the navigation affordances in `set`.
#[must_use]
pub const fn nav_items(set: NavSet) -> &'static str {
    match set {
        NavSet::Desktop => ".nav-item[data-page]",
        NavSet::Mobile => "#mobileMenu a[data-page]",
    }
}

/// Element id of the toggle button in `slot`.
#[must_use]
pub const fn theme_toggle_id(slot: ThemeToggleSlot) -> &'static str {
    match slot {
        ThemeToggleSlot::Desktop => "themeToggle",
        ThemeToggleSlot::Mobile => "mobileThemeToggle",
    }
}

/// Selector of the icon glyph inside the toggle in `slot`.
#[must_use]
pub const fn theme_icon(slot: ThemeToggleSlot) -> &'static str {
    match slot {
        ThemeToggleSlot::Desktop => "#themeToggle .material-symbols-outlined",
        ThemeToggleSlot::Mobile => "#mobileThemeToggle .material-symbols-outlined",
    }
}
