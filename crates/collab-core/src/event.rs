#![forbid(unsafe_code)]

//! Canonical host events.
//!
//! The embedding host (the wasm glue in the browser, or a test) converts DOM
//! events into these values. Each variant carries only what the handlers need:
//! indices into affordance lists rather than element handles, so the same
//! event stream replays identically against an in-memory view.

use crate::scroll::ScrollMetrics;

/// One of the two navigation affordance sets.
///
/// The desktop bar and the mobile drawer hold separate element lists that
/// target the same pages. They are always updated together but each is
/// re-scanned independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavSet {
    /// Top navigation bar (`.nav-item[data-page]`).
    Desktop,
    /// Mobile drawer (`#mobileMenu a[data-page]`).
    Mobile,
}

impl NavSet {
    /// Both sets in update order.
    pub const ALL: [NavSet; 2] = [NavSet::Desktop, NavSet::Mobile];
}

/// A theme toggle button location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeToggleSlot {
    /// `#themeToggle` in the top bar.
    Desktop,
    /// `#mobileThemeToggle` inside the mobile drawer.
    Mobile,
}

impl ThemeToggleSlot {
    /// Both slots in update order.
    pub const ALL: [ThemeToggleSlot; 2] = [ThemeToggleSlot::Desktop, ThemeToggleSlot::Mobile];
}

/// A rendered card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardList {
    /// Student roster (`#studentsGrid`).
    Students,
    /// Project listing (`#projectsGrid`).
    Projects,
}

/// A form whose submission is intercepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormId {
    /// `#projectForm`.
    Project,
    /// `#contactForm`.
    Contact,
}

impl FormId {
    /// Both forms.
    pub const ALL: [FormId; 2] = [FormId::Project, FormId::Contact];

    /// DOM id of the form element.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Project => "projectForm",
            Self::Contact => "contactForm",
        }
    }
}

/// Host event delivered to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A navigation affordance at `index` within `set` was clicked.
    NavClicked {
        /// Affordance set the item belongs to.
        set: NavSet,
        /// Position of the item within its set, in document order.
        index: usize,
    },
    /// The URL fragment changed (back/forward, manual edit, or our own write).
    FragmentChanged,
    /// A theme toggle was clicked.
    ThemeToggleClicked(ThemeToggleSlot),
    /// The OS color-scheme preference changed.
    ColorSchemeChanged {
        /// Whether the OS now prefers a dark scheme.
        prefers_dark: bool,
    },
    /// The student search input changed to this raw value.
    SearchInput(String),
    /// The project category button at `index` was clicked.
    FilterClicked {
        /// Position of the button in document order.
        index: usize,
    },
    /// The mobile menu toggle (`#navToggle`) was clicked.
    MenuToggleClicked,
    /// The document scrolled.
    Scrolled(ScrollMetrics),
    /// The back-to-top button was clicked.
    BackToTopClicked,
    /// A form submission was intercepted.
    FormSubmitted(FormId),
    /// A rendered card was clicked.
    CardClicked {
        /// List containing the card.
        list: CardList,
        /// Position of the card within its list.
        index: usize,
    },
    /// An in-page anchor (`href="#target"`) that is not a navigation
    /// affordance was clicked.
    AnchorClicked(String),
    /// Host time advanced; fires due deferred work.
    Tick,
}

impl Event {
    /// Short static label used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NavClicked { .. } => "nav_clicked",
            Self::FragmentChanged => "fragment_changed",
            Self::ThemeToggleClicked(_) => "theme_toggle_clicked",
            Self::ColorSchemeChanged { .. } => "color_scheme_changed",
            Self::SearchInput(_) => "search_input",
            Self::FilterClicked { .. } => "filter_clicked",
            Self::MenuToggleClicked => "menu_toggle_clicked",
            Self::Scrolled(_) => "scrolled",
            Self::BackToTopClicked => "back_to_top_clicked",
            Self::FormSubmitted(_) => "form_submitted",
            Self::CardClicked { .. } => "card_clicked",
            Self::AnchorClicked(_) => "anchor_clicked",
            Self::Tick => "tick",
        }
    }
}
