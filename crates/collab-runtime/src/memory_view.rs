#![forbid(unsafe_code)]

//! In-memory [`View`] for tests and headless runs.
//!
//! `MemoryView` models exactly the document state the application can touch
//! and records every side effect (fragment writes, scroll requests, messages,
//! form resets) so tests can assert on them. Elements are opt-in: a fresh
//! `MemoryView::new()` has no pages, no affordances and no grids, which is how
//! the "missing anchor ⇒ feature inert" paths get exercised.

use std::collections::HashMap;

use collab_core::catalog::{Project, Student};
use collab_core::event::{CardList, FormId, NavSet, ThemeToggleSlot};
use collab_core::page::PageId;

use crate::view::View;

/// Page ids of the stock layout, in document order.
pub const STOCK_PAGES: [&str; 6] = ["home", "students", "projects", "post-project", "about", "contact"];

/// Filter button tokens of the stock layout.
pub const STOCK_FILTERS: [&str; 4] = ["all", "frontend", "backend", "design"];

#[derive(Debug, Clone)]
struct NavItem {
    target: Option<PageId>,
    active: bool,
}

#[derive(Debug, Clone)]
struct FilterButton {
    token: String,
    selected: bool,
}

/// Recorded document state.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    pages: Vec<(PageId, bool)>,
    desktop_nav: Vec<NavItem>,
    mobile_nav: Vec<NavItem>,
    fragment: String,
    fragment_writes: Vec<String>,
    scroll_requests: Vec<f64>,
    anchors: Vec<String>,
    scrolled_into_view: Vec<String>,
    dark: bool,
    theme_icons: HashMap<ThemeToggleSlot, String>,
    menu: Option<bool>,
    students: Option<Vec<bool>>,
    projects: Option<Vec<bool>>,
    filters: Vec<FilterButton>,
    forms: HashMap<FormId, usize>,
    messages: Vec<String>,
    progress: Option<f64>,
    back_to_top: Option<bool>,
    hero_offset: Option<f64>,
}

impl MemoryView {
    /// An empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full page layout: six pages, identical desktop and mobile
    /// navigation, both theme toggles, the mobile menu, both card grids, the
    /// four category buttons, and both forms.
    #[must_use]
    pub fn stock() -> Self {
        Self::new()
            .with_pages(&STOCK_PAGES)
            .with_nav(NavSet::Desktop, &STOCK_PAGES)
            .with_nav(NavSet::Mobile, &STOCK_PAGES)
            .with_theme_toggles()
            .with_menu()
            .with_card_grids()
            .with_filters(&STOCK_FILTERS)
            .with_form(FormId::Project)
            .with_form(FormId::Contact)
    }

    /// Add view containers, all initially inactive.
    #[must_use]
    pub fn with_pages(mut self, ids: &[&str]) -> Self {
        self.pages
            .extend(ids.iter().map(|id| (PageId::new(*id), false)));
        self
    }

    /// Append affordances to `set`, one per target.
    #[must_use]
    pub fn with_nav(mut self, set: NavSet, targets: &[&str]) -> Self {
        self.nav_mut(set).extend(targets.iter().map(|t| NavItem {
            target: PageId::from_fragment(t),
            active: false,
        }));
        self
    }

    /// Append an affordance with no target attribute.
    #[must_use]
    pub fn with_untargeted_nav(mut self, set: NavSet) -> Self {
        self.nav_mut(set).push(NavItem {
            target: None,
            active: false,
        });
        self
    }

    /// Add both theme toggles showing the light-mode icon.
    #[must_use]
    pub fn with_theme_toggles(mut self) -> Self {
        for slot in ThemeToggleSlot::ALL {
            self.theme_icons.insert(slot, "dark_mode".to_owned());
        }
        self
    }

    /// Add the mobile menu (closed) and its toggle.
    #[must_use]
    pub fn with_menu(mut self) -> Self {
        self.menu = Some(false);
        self
    }

    /// Add empty student and project grids.
    #[must_use]
    pub fn with_card_grids(mut self) -> Self {
        self.students = Some(Vec::new());
        self.projects = Some(Vec::new());
        self
    }

    /// Add category filter buttons.
    #[must_use]
    pub fn with_filters(mut self, tokens: &[&str]) -> Self {
        self.filters.extend(tokens.iter().map(|t| FilterButton {
            token: (*t).to_owned(),
            selected: false,
        }));
        self
    }

    /// Add a form.
    #[must_use]
    pub fn with_form(mut self, form: FormId) -> Self {
        self.forms.insert(form, 0);
        self
    }

    /// Add an in-page anchor target.
    #[must_use]
    pub fn with_anchor(mut self, id: &str) -> Self {
        self.anchors.push(id.to_owned());
        self
    }

    /// Preset the URL fragment, as if the page was opened with it.
    #[must_use]
    pub fn with_fragment(mut self, fragment: &str) -> Self {
        self.fragment = fragment.to_owned();
        self
    }

    /// Change the fragment from outside the application (back/forward or a
    /// manual edit). Does not count as an application write.
    pub fn set_external_fragment(&mut self, fragment: &str) {
        self.fragment = fragment.to_owned();
    }

    fn nav(&self, set: NavSet) -> &Vec<NavItem> {
        match set {
            NavSet::Desktop => &self.desktop_nav,
            NavSet::Mobile => &self.mobile_nav,
        }
    }

    fn nav_mut(&mut self, set: NavSet) -> &mut Vec<NavItem> {
        match set {
            NavSet::Desktop => &mut self.desktop_nav,
            NavSet::Mobile => &mut self.mobile_nav,
        }
    }

    fn cards_mut(&mut self, list: CardList) -> Option<&mut Vec<bool>> {
        match list {
            CardList::Students => self.students.as_mut(),
            CardList::Projects => self.projects.as_mut(),
        }
    }

    // --- Inspection --------------------------------------------------------

    /// Ids of the containers currently marked active.
    #[must_use]
    pub fn active_pages(&self) -> Vec<&PageId> {
        self.pages
            .iter()
            .filter(|(_, active)| *active)
            .map(|(id, _)| id)
            .collect()
    }

    /// Active flag of every affordance in `set`.
    #[must_use]
    pub fn nav_active(&self, set: NavSet) -> Vec<bool> {
        self.nav(set).iter().map(|item| item.active).collect()
    }

    /// Every fragment the application wrote, oldest first.
    #[must_use]
    pub fn fragment_writes(&self) -> &[String] {
        &self.fragment_writes
    }

    /// Every programmatic viewport scroll, oldest first.
    #[must_use]
    pub fn scroll_requests(&self) -> &[f64] {
        &self.scroll_requests
    }

    /// Anchor ids scrolled into view, oldest first.
    #[must_use]
    pub fn scrolled_into_view(&self) -> &[String] {
        &self.scrolled_into_view
    }

    /// Whether the root carries the `dark` class.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.dark
    }

    /// Icon currently shown by a theme toggle.
    #[must_use]
    pub fn theme_icon(&self, slot: ThemeToggleSlot) -> Option<&str> {
        self.theme_icons.get(&slot).map(String::as_str)
    }

    /// Whether the mobile menu is open. `None` if it does not exist.
    #[must_use]
    pub const fn menu_open(&self) -> Option<bool> {
        self.menu
    }

    /// Visibility of each card in `list`. `None` if the grid does not exist.
    #[must_use]
    pub fn card_visibility(&self, list: CardList) -> Option<&[bool]> {
        match list {
            CardList::Students => self.students.as_deref(),
            CardList::Projects => self.projects.as_deref(),
        }
    }

    /// Indices of the visible cards in `list`.
    #[must_use]
    pub fn visible_cards(&self, list: CardList) -> Vec<usize> {
        self.card_visibility(list)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(i, _)| i)
            .collect()
    }

    /// Tokens of the selected filter buttons.
    #[must_use]
    pub fn selected_filters(&self) -> Vec<&str> {
        self.filters
            .iter()
            .filter(|b| b.selected)
            .map(|b| b.token.as_str())
            .collect()
    }

    /// How many times `form` was reset. `None` if it does not exist.
    #[must_use]
    pub fn form_resets(&self, form: FormId) -> Option<usize> {
        self.forms.get(&form).copied()
    }

    /// Messages shown to the user, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Last progress-bar scale applied.
    #[must_use]
    pub const fn scroll_progress(&self) -> Option<f64> {
        self.progress
    }

    /// Last back-to-top visibility applied.
    #[must_use]
    pub const fn back_to_top_visible(&self) -> Option<bool> {
        self.back_to_top
    }

    /// Last hero translation applied.
    #[must_use]
    pub const fn hero_offset(&self) -> Option<f64> {
        self.hero_offset
    }
}

impl View for MemoryView {
    fn page_ids(&self) -> Vec<PageId> {
        self.pages.iter().map(|(id, _)| id.clone()).collect()
    }

    fn set_page_active(&mut self, page: &PageId, active: bool) {
        if let Some((_, flag)) = self.pages.iter_mut().find(|(id, _)| id == page) {
            *flag = active;
        }
    }

    fn nav_targets(&self, set: NavSet) -> Vec<Option<PageId>> {
        self.nav(set).iter().map(|item| item.target.clone()).collect()
    }

    fn set_nav_active(&mut self, set: NavSet, index: usize, active: bool) {
        if let Some(item) = self.nav_mut(set).get_mut(index) {
            item.active = active;
        }
    }

    fn fragment(&self) -> String {
        self.fragment.clone()
    }

    fn set_fragment(&mut self, fragment: &str) {
        self.fragment = format!("#{fragment}");
        self.fragment_writes.push(fragment.to_owned());
    }

    fn scroll_to(&mut self, top: f64) {
        self.scroll_requests.push(top);
    }

    fn scroll_into_view(&mut self, id: &str) -> bool {
        if self.anchors.iter().any(|a| a == id) {
            self.scrolled_into_view.push(id.to_owned());
            true
        } else {
            false
        }
    }

    fn set_dark_class(&mut self, dark: bool) {
        self.dark = dark;
    }

    fn set_theme_icon(&mut self, slot: ThemeToggleSlot, icon: &str) {
        if let Some(current) = self.theme_icons.get_mut(&slot) {
            icon.clone_into(current);
        }
    }

    fn has_menu(&self) -> bool {
        self.menu.is_some()
    }

    fn set_menu_open(&mut self, open: bool) {
        if let Some(state) = self.menu.as_mut() {
            *state = open;
        }
    }

    fn render_students(&mut self, students: &[Student]) -> bool {
        match self.students.as_mut() {
            Some(cards) => {
                *cards = vec![true; students.len()];
                true
            }
            None => false,
        }
    }

    fn render_projects(&mut self, projects: &[Project]) -> bool {
        match self.projects.as_mut() {
            Some(cards) => {
                *cards = vec![true; projects.len()];
                true
            }
            None => false,
        }
    }

    fn set_card_visible(&mut self, list: CardList, index: usize, visible: bool) {
        if let Some(card) = self.cards_mut(list).and_then(|cards| cards.get_mut(index)) {
            *card = visible;
        }
    }

    fn filter_tokens(&self) -> Vec<String> {
        self.filters.iter().map(|b| b.token.clone()).collect()
    }

    fn set_filter_selected(&mut self, index: usize, selected: bool) {
        if let Some(button) = self.filters.get_mut(index) {
            button.selected = selected;
        }
    }

    fn has_form(&self, form: FormId) -> bool {
        self.forms.contains_key(&form)
    }

    fn reset_form(&mut self, form: FormId) {
        if let Some(resets) = self.forms.get_mut(&form) {
            *resets += 1;
        }
    }

    fn show_message(&mut self, text: &str) {
        self.messages.push(text.to_owned());
    }

    fn set_scroll_progress(&mut self, ratio: f64) {
        self.progress = Some(ratio);
    }

    fn set_back_to_top_visible(&mut self, visible: bool) {
        self.back_to_top = Some(visible);
    }

    fn set_hero_offset(&mut self, px: f64) {
        self.hero_offset = Some(px);
    }
}
