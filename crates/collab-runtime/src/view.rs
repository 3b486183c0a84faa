#![forbid(unsafe_code)]

//! The rendering boundary.
//!
//! [`View`] is everything the application logic needs from the document:
//! enumerate containers and affordances, flip indicator classes, write the
//! URL fragment, materialize card lists, and show messages. The browser
//! implementation lives in `collab-web`; [`crate::memory_view::MemoryView`]
//! implements it in memory for tests.
//!
//! Lookups are optional by construction. A missing element is reported as
//! absent (`false`, `None`, or an empty list) and the caller skips the
//! feature; nothing here can fail.

use collab_core::catalog::{Project, Student};
use collab_core::event::{CardList, FormId, NavSet, ThemeToggleSlot};
use collab_core::page::PageId;

/// Document operations used by the router, theme policy, and filters.
pub trait View {
    // --- Pages -------------------------------------------------------------

    /// Ids of every view container, in document order.
    fn page_ids(&self) -> Vec<PageId>;

    /// Whether a container with this id exists.
    fn has_page(&self, page: &PageId) -> bool {
        self.page_ids().iter().any(|p| p == page)
    }

    /// Mark a container active (shown) or inactive.
    fn set_page_active(&mut self, page: &PageId, active: bool);

    // --- Navigation affordances -------------------------------------------

    /// Target page of each affordance in `set`, in document order.
    ///
    /// `None` marks an item without a usable target attribute.
    fn nav_targets(&self, set: NavSet) -> Vec<Option<PageId>>;

    /// Toggle the active indicator of the affordance at `index` in `set`.
    fn set_nav_active(&mut self, set: NavSet, index: usize, active: bool);

    // --- Address bar and viewport -----------------------------------------

    /// Current URL fragment, with or without the leading `#`.
    fn fragment(&self) -> String;

    /// Replace the URL fragment.
    fn set_fragment(&mut self, fragment: &str);

    /// Smoothly scroll the viewport to a vertical offset.
    fn scroll_to(&mut self, top: f64);

    /// Scroll the element with `id` into view. Returns `false` if it does not
    /// exist.
    fn scroll_into_view(&mut self, id: &str) -> bool;

    // --- Theme and mobile menu --------------------------------------------

    /// Add or remove the root `dark` class.
    fn set_dark_class(&mut self, dark: bool);

    /// Set the icon glyph name of a theme toggle, if that toggle exists.
    fn set_theme_icon(&mut self, slot: ThemeToggleSlot, icon: &str);

    /// Whether both the mobile menu and its toggle exist.
    fn has_menu(&self) -> bool;

    /// Show or hide the mobile menu and update its toggle's indicator.
    fn set_menu_open(&mut self, open: bool);

    // --- Cards and filters ------------------------------------------------

    /// Materialize the student roster. Returns `false` if the grid is absent.
    fn render_students(&mut self, students: &[Student]) -> bool;

    /// Materialize the project listing. Returns `false` if the grid is absent.
    fn render_projects(&mut self, projects: &[Project]) -> bool;

    /// Show or hide one rendered card without removing it.
    fn set_card_visible(&mut self, list: CardList, index: usize, visible: bool);

    /// Category token of each filter button, in document order.
    fn filter_tokens(&self) -> Vec<String>;

    /// Toggle the selected indicator of the filter button at `index`.
    fn set_filter_selected(&mut self, index: usize, selected: bool);

    // --- Forms and messages -----------------------------------------------

    /// Whether the form exists.
    fn has_form(&self, form: FormId) -> bool;

    /// Clear every field of the form.
    fn reset_form(&mut self, form: FormId);

    /// Show a blocking acknowledgement to the user.
    fn show_message(&mut self, text: &str);

    // --- Scroll cosmetics -------------------------------------------------

    /// Scale the reading-progress bar.
    fn set_scroll_progress(&mut self, _ratio: f64) {}

    /// Show or hide the back-to-top button.
    fn set_back_to_top_visible(&mut self, _visible: bool) {}

    /// Translate the hero region vertically.
    fn set_hero_offset(&mut self, _px: f64) {}
}
