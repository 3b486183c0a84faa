#![forbid(unsafe_code)]

//! Host-driven application loop.
//!
//! [`App`] owns the whole view state (current page, theme policy, filter
//! state, mobile menu) and dispatches host [`Event`]s against a [`View`] and a
//! [`StorageBackend`]. There are no globals and no ambient clock: the host
//! pushes events and advances time, then calls [`App::step`].
//!
//! ```
//! use collab_core::event::Event;
//! use collab_runtime::app::App;
//! use collab_runtime::memory_view::MemoryView;
//! use collab_runtime::storage::MemoryStorage;
//! use core::time::Duration;
//!
//! let mut app = App::new(MemoryView::stock(), MemoryStorage::new());
//! app.init(false);
//!
//! app.push_event(Event::SearchInput("Arjun".into()));
//! app.step();
//! app.advance_time(Duration::from_millis(300));
//! let result = app.step();
//! assert!(result.search_applied);
//! ```
//!
//! # Lifecycle
//!
//! 1. [`App::new`] / [`App::with_config`]: wrap a view and a store.
//! 2. [`App::init`]: resolve the theme, render the card lists, and activate
//!    the page named by the fragment. Call once.
//! 3. [`App::push_event`] + [`App::advance_time`] + [`App::step`]: repeat
//!    from the host event loop. [`App::handle`] dispatches one event directly.

use core::time::Duration;
use std::collections::VecDeque;

use collab_core::catalog::{PROJECTS, STUDENTS};
use collab_core::clock::{DeterministicClock, MonotonicClock};
use collab_core::debounce::Debouncer;
use collab_core::event::{Event, NavSet, ThemeToggleSlot};
use collab_core::page::PageId;
use collab_core::scroll::{ScrollEffects, ScrollMetrics};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::filter::{CATEGORY_ALL, CategoryBar, FilterOutcome, ListFilter, Predicate};
use crate::forms;
use crate::router::{NavOutcome, Router};
use crate::storage::StorageBackend;
use crate::theme::{Theme, ThemePolicy, ThemePreference};
use crate::view::View;

/// Current filter inputs. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Lowercased student search query last applied.
    pub search: String,
    /// Project category token last applied.
    pub category: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CATEGORY_ALL.to_owned(),
        }
    }
}

/// Snapshot of the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub current_page: PageId,
    pub theme: Theme,
    pub theme_preference: ThemePreference,
    pub filter: FilterState,
    pub menu_open: bool,
}

/// Result of a single [`App::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Number of events processed during this step.
    pub events_processed: u32,
    /// Whether a debounced search fired during this step.
    pub search_applied: bool,
    /// When the next deferred work falls due, if any.
    pub next_deadline: Option<Duration>,
}

/// The application: view state plus the view and store it drives.
pub struct App<V: View, S: StorageBackend> {
    config: AppConfig,
    view: V,
    storage: S,
    clock: DeterministicClock,
    queue: VecDeque<Event>,
    router: Router,
    theme: ThemePolicy,
    students: ListFilter,
    projects: ListFilter,
    categories: CategoryBar,
    search: Debouncer<String>,
    filter: FilterState,
    menu_open: bool,
    scroll: ScrollEffects,
    initialized: bool,
}

impl<V: View, S: StorageBackend> App<V, S> {
    /// Create an application with the default configuration.
    #[must_use]
    pub fn new(view: V, storage: S) -> Self {
        Self::with_config(view, storage, AppConfig::default())
    }

    /// Create an application with an explicit configuration.
    #[must_use]
    pub fn with_config(view: V, storage: S, config: AppConfig) -> Self {
        Self {
            router: Router::new(config.default_page_id()),
            search: Debouncer::new(config.search_debounce()),
            scroll: ScrollEffects::new(config.scroll_config()),
            config,
            view,
            storage,
            clock: DeterministicClock::new(),
            queue: VecDeque::new(),
            theme: ThemePolicy::default(),
            students: ListFilter::students(STUDENTS),
            projects: ListFilter::projects(PROJECTS),
            categories: CategoryBar::new(),
            filter: FilterState::default(),
            menu_open: false,
            initialized: false,
        }
    }

    /// Resolve the theme, render the cards, and show the initial page.
    ///
    /// `os_prefers_dark` is the OS color-scheme preference at load. Calling
    /// this twice is a no-op.
    pub fn init(&mut self, os_prefers_dark: bool) {
        if self.initialized {
            warn!("App::init called twice; ignoring");
            return;
        }
        self.initialized = true;
        info!("collabthon ui loaded");

        let stored = match self.storage.get(&self.config.theme_storage_key) {
            Ok(value) => value,
            Err(err) => {
                warn!(backend = self.storage.name(), error = %err, "theme preference unreadable");
                None
            }
        };
        self.theme = ThemePolicy::new(ThemePreference::from_stored(stored.as_deref()), os_prefers_dark);
        self.apply_theme(self.theme.applied());

        if !self.view.render_students(STUDENTS) {
            debug!("student grid missing; roster not rendered");
        }
        if !self.view.render_projects(PROJECTS) {
            debug!("project grid missing; listing not rendered");
        }
        let category = self.filter.category.clone();
        if self.categories.select_token(&category, &mut self.view).is_none() {
            debug!(category = %category, "no filter button for initial category");
        }

        let _ = self.router.initialize(&mut self.view);
        info!("scroll effects initialized");
    }

    // --- Host loop -----------------------------------------------------------

    /// Queue an event for the next [`step`](Self::step).
    pub fn push_event(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Advance host time by `dt`.
    pub fn advance_time(&mut self, dt: Duration) {
        self.clock.advance(dt);
    }

    /// Set host time. Earlier values are ignored.
    pub fn set_time(&mut self, now: Duration) {
        self.clock.set(now);
    }

    /// Current host time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now_mono()
    }

    /// Process every queued event, then fire due deferred work.
    pub fn step(&mut self) -> StepResult {
        let mut events_processed: u32 = 0;
        while let Some(event) = self.queue.pop_front() {
            events_processed = events_processed.saturating_add(1);
            self.handle(event);
        }
        let search_applied = self.fire_due().is_some();
        StepResult {
            events_processed,
            search_applied,
            next_deadline: self.next_deadline(),
        }
    }

    /// Dispatch one event immediately.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::NavClicked { set, index } => {
                let _ = self.router.on_nav_clicked(set, index, &mut self.view);
                if set == NavSet::Mobile {
                    self.close_menu();
                }
            }
            Event::FragmentChanged => {
                let _ = self.router.on_fragment_changed(&mut self.view);
            }
            Event::ThemeToggleClicked(slot) => {
                self.toggle_theme();
                if slot == ThemeToggleSlot::Mobile {
                    self.close_menu();
                }
            }
            Event::ColorSchemeChanged { prefers_dark } => {
                if let Some(theme) = self.theme.os_changed(prefers_dark) {
                    debug!(theme = %theme, "following OS color scheme");
                    self.apply_theme(theme);
                }
            }
            Event::SearchInput(raw) => {
                let now = self.clock.now_mono();
                self.search.push(raw, now);
            }
            Event::FilterClicked { index } => {
                let _ = self.select_category(index);
            }
            Event::MenuToggleClicked => self.toggle_menu(),
            Event::Scrolled(metrics) => self.on_scroll(&metrics),
            Event::BackToTopClicked => self.view.scroll_to(0.0),
            Event::FormSubmitted(form) => {
                if !forms::submit(form, &mut self.view) {
                    debug!(form = form.element_id(), "submit for missing form ignored");
                }
            }
            Event::CardClicked { list, index } => {
                let _ = forms::activate_card(list, index, &mut self.view);
            }
            Event::AnchorClicked(id) => {
                if !self.view.scroll_into_view(&id) {
                    debug!(anchor = %id, "anchor target missing");
                }
            }
            Event::Tick => {
                let _ = self.fire_due();
            }
        }
    }

    /// Apply the pending search if its quiescence window has elapsed.
    pub fn fire_due(&mut self) -> Option<FilterOutcome> {
        let raw = self.search.poll(self.clock.now_mono())?;
        Some(self.search_now(&raw))
    }

    /// When the pending search falls due, if one is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.search.deadline()
    }

    // --- Operations ----------------------------------------------------------

    /// Show `page`. Unknown ids leave everything unchanged.
    pub fn navigate_to(&mut self, page: impl Into<PageId>) -> NavOutcome {
        self.router.navigate_to(page.into(), &mut self.view)
    }

    /// Flip the theme, persist the explicit choice, and update the toggles.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme.toggle();
        if let Err(err) = self.storage.set(&self.config.theme_storage_key, theme.as_str()) {
            warn!(backend = self.storage.name(), error = %err, "theme preference not saved");
        }
        debug!(theme = %theme, "theme toggled");
        self.apply_theme(theme);
        theme
    }

    /// Filter the roster by `query` right away, cancelling any pending
    /// debounced search.
    pub fn search_now(&mut self, query: &str) -> FilterOutcome {
        self.search.cancel();
        let predicate = Predicate::text(query);
        if let Predicate::Text(lowered) = &predicate {
            self.filter.search.clone_from(lowered);
        }
        self.students.apply(predicate, &mut self.view)
    }

    /// Select the category button at `index` and filter the listing by it.
    ///
    /// Returns `None` if there is no such button.
    pub fn select_category(&mut self, index: usize) -> Option<FilterOutcome> {
        let token = self.categories.select(index, &mut self.view)?;
        self.filter.category.clone_from(&token);
        Some(self.projects.apply(Predicate::category(token), &mut self.view))
    }

    /// Open or close the mobile menu. Inert if the menu is missing.
    pub fn toggle_menu(&mut self) {
        if !self.view.has_menu() {
            return;
        }
        self.menu_open = !self.menu_open;
        self.view.set_menu_open(self.menu_open);
    }

    /// Close the mobile menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
        self.view.set_menu_open(false);
    }

    // --- Accessors -----------------------------------------------------------

    /// Snapshot of the view state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        ViewState {
            current_page: self.router.current().clone(),
            theme: self.theme.applied(),
            theme_preference: self.theme.preference(),
            filter: self.filter.clone(),
            menu_open: self.menu_open,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Visibility of the roster cards, in document order.
    #[must_use]
    pub fn student_visibility(&self) -> &[bool] {
        self.students.visibility()
    }

    /// Visibility of the project cards, in document order.
    #[must_use]
    pub fn project_visibility(&self) -> &[bool] {
        self.projects.visibility()
    }

    // --- Internals -----------------------------------------------------------

    fn apply_theme(&mut self, theme: Theme) {
        self.view.set_dark_class(theme.is_dark());
        for slot in ThemeToggleSlot::ALL {
            self.view.set_theme_icon(slot, theme.toggle_icon());
        }
    }

    fn on_scroll(&mut self, metrics: &ScrollMetrics) {
        let (frame, prev) = self.scroll.update(metrics);
        self.view.set_scroll_progress(frame.progress);
        if prev.map(|p| p.back_to_top_visible) != Some(frame.back_to_top_visible) {
            self.view.set_back_to_top_visible(frame.back_to_top_visible);
        }
        self.view.set_hero_offset(frame.hero_offset);
    }
}
