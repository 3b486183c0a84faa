#![forbid(unsafe_code)]

//! Hash-addressed page router.
//!
//! The router owns the single current page id and keeps three things in
//! agreement with it: the active flag on every view container, the URL
//! fragment, and the active indicator on every navigation affordance in both
//! [`NavSet`]s.
//!
//! # Fragment loop guard
//!
//! Writing the fragment makes the browser emit a fragment-change notification,
//! which the router also handles (that is how back/forward works). Two rules
//! keep this from looping:
//!
//! 1. The fragment is only written when it differs from the target page.
//! 2. A fragment change that resolves to the current page does nothing.

use collab_core::event::NavSet;
use collab_core::page::PageId;
use tracing::{debug, warn};

use crate::view::View;

/// Result of a routing request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum NavOutcome {
    /// The page was activated and every indicator re-synced.
    Activated(PageId),
    /// The request resolved to the page already showing; nothing was touched.
    AlreadyActive(PageId),
    /// No container has this id; nothing was touched.
    UnknownPage(PageId),
    /// The clicked affordance does not exist or carries no target.
    NoTarget,
}

impl NavOutcome {
    /// Whether the view was modified.
    #[must_use]
    pub const fn changed_view(&self) -> bool {
        matches!(self, Self::Activated(_))
    }
}

/// Current-page state plus the activation logic.
#[derive(Debug, Clone)]
pub struct Router {
    current: PageId,
    default_page: PageId,
}

impl Router {
    /// Create a router whose fallback page is `default_page`.
    #[must_use]
    pub fn new(default_page: PageId) -> Self {
        Self {
            current: default_page.clone(),
            default_page,
        }
    }

    /// The current page id.
    #[must_use]
    pub const fn current(&self) -> &PageId {
        &self.current
    }

    /// The fallback page id.
    #[must_use]
    pub const fn default_page(&self) -> &PageId {
        &self.default_page
    }

    /// Map a fragment to a page: known ids map to themselves, everything else
    /// (empty or unknown) maps to the default page.
    #[must_use]
    pub fn resolve_fragment(&self, fragment: &str, view: &impl View) -> PageId {
        PageId::from_fragment(fragment)
            .filter(|page| view.has_page(page))
            .unwrap_or_else(|| self.default_page.clone())
    }

    /// Activate the page named by the current fragment. Called once at load.
    ///
    /// A default page with no container is replaced first, by `home` if it
    /// exists and otherwise by the first container in the view.
    pub fn initialize(&mut self, view: &mut impl View) -> NavOutcome {
        self.settle_default(view);
        let target = self.resolve_fragment(&view.fragment(), view);
        self.navigate_to(target, view)
    }

    fn settle_default(&mut self, view: &impl View) {
        if view.has_page(&self.default_page) {
            return;
        }
        let home = PageId::home();
        let fallback = if view.has_page(&home) {
            Some(home)
        } else {
            view.page_ids().into_iter().next()
        };
        let Some(fallback) = fallback else {
            warn!(configured = %self.default_page, "view has no page containers");
            return;
        };
        warn!(
            configured = %self.default_page,
            fallback = %fallback,
            "default page has no container"
        );
        self.current = fallback.clone();
        self.default_page = fallback;
    }

    /// Show `page` and hide every other container.
    ///
    /// Unknown ids are ignored: no container is hidden and the current page
    /// stays as it was.
    pub fn navigate_to(&mut self, page: PageId, view: &mut impl View) -> NavOutcome {
        if !view.has_page(&page) {
            debug!(page = %page, "navigation to unknown page ignored");
            return NavOutcome::UnknownPage(page);
        }
        self.activate(&page, view);
        NavOutcome::Activated(page)
    }

    /// Handle a fragment-change notification.
    pub fn on_fragment_changed(&mut self, view: &mut impl View) -> NavOutcome {
        let target = self.resolve_fragment(&view.fragment(), view);
        if target == self.current {
            // Either the echo of our own write or a no-op edit. The fragment
            // may still be an unknown id; put it back in agreement.
            if PageId::from_fragment(&view.fragment()).as_ref() != Some(&target) {
                view.set_fragment(target.as_str());
            }
            return NavOutcome::AlreadyActive(target);
        }
        self.navigate_to(target, view)
    }

    /// Handle a click on the affordance at `index` in `set`.
    pub fn on_nav_clicked(&mut self, set: NavSet, index: usize, view: &mut impl View) -> NavOutcome {
        match view.nav_targets(set).into_iter().nth(index).flatten() {
            Some(target) => self.navigate_to(target, view),
            None => NavOutcome::NoTarget,
        }
    }

    fn activate(&mut self, page: &PageId, view: &mut impl View) {
        for id in view.page_ids() {
            view.set_page_active(&id, &id == page);
        }
        self.current = page.clone();

        if PageId::from_fragment(&view.fragment()).as_ref() != Some(page) {
            view.set_fragment(page.as_str());
        }
        view.scroll_to(0.0);
        sync_nav(page, view);

        debug!(page = %page, "showing page");
    }
}

/// Set each affordance's active flag iff it targets `page`.
///
/// Both sets are re-scanned on every call; they are separate element lists
/// and may diverge in content.
fn sync_nav(page: &PageId, view: &mut impl View) {
    for set in NavSet::ALL {
        let targets = view.nav_targets(set);
        for (index, target) in targets.iter().enumerate() {
            view.set_nav_active(set, index, target.as_ref() == Some(page));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_view::MemoryView;
    use pretty_assertions::assert_eq;

    fn router() -> Router {
        Router::new(PageId::home())
    }

    #[test]
    fn initialize_with_empty_fragment_shows_home() {
        let mut view = MemoryView::stock();
        let mut r = router();
        assert_eq!(r.initialize(&mut view), NavOutcome::Activated(PageId::home()));
        assert_eq!(view.active_pages(), vec![&PageId::home()]);
        assert_eq!(view.fragment(), "#home");
    }

    #[test]
    fn initialize_with_unknown_fragment_falls_back_to_home() {
        let mut view = MemoryView::stock().with_fragment("#nowhere");
        let mut r = router();
        assert_eq!(r.initialize(&mut view), NavOutcome::Activated(PageId::home()));
        assert_eq!(view.fragment(), "#home");
    }

    #[test]
    fn missing_default_page_falls_back_to_home() {
        let mut view = MemoryView::stock();
        let mut r = Router::new(PageId::new("landing"));
        assert_eq!(r.initialize(&mut view), NavOutcome::Activated(PageId::home()));
        assert_eq!(r.default_page(), &PageId::home());
        assert_eq!(view.active_pages(), vec![&PageId::home()]);
        assert_eq!(view.fragment(), "#home");
    }

    #[test]
    fn missing_default_without_home_uses_first_container() {
        let mut view = MemoryView::new().with_pages(&["about", "contact"]);
        let mut r = Router::new(PageId::new("landing"));
        assert_eq!(r.initialize(&mut view), NavOutcome::Activated(PageId::new("about")));

        view.set_external_fragment("#nowhere");
        let _ = r.on_fragment_changed(&mut view);
        assert_eq!(r.current(), &PageId::new("about"));
        assert_eq!(view.active_pages(), vec![&PageId::new("about")]);
    }

    #[test]
    fn navigate_syncs_both_nav_sets() {
        let mut view = MemoryView::stock();
        let mut r = router();
        let _ = r.navigate_to(PageId::new("projects"), &mut view);

        let expected = vec![false, false, true, false, false, false];
        assert_eq!(view.nav_active(NavSet::Desktop), expected);
        assert_eq!(view.nav_active(NavSet::Mobile), expected);
        assert_eq!(view.scroll_requests().last(), Some(&0.0));
    }

    #[test]
    fn nav_sets_are_scanned_independently() {
        let mut view = MemoryView::new()
            .with_pages(&["home", "about"])
            .with_nav(NavSet::Desktop, &["home", "about"])
            .with_nav(NavSet::Mobile, &["about"]);
        let mut r = router();
        let _ = r.navigate_to(PageId::new("about"), &mut view);
        assert_eq!(view.nav_active(NavSet::Desktop), vec![false, true]);
        assert_eq!(view.nav_active(NavSet::Mobile), vec![true]);
    }

    #[test]
    fn unknown_page_touches_nothing() {
        let mut view = MemoryView::stock();
        let mut r = router();
        let _ = r.initialize(&mut view);
        let writes = view.fragment_writes().len();

        let outcome = r.navigate_to(PageId::new("missing"), &mut view);
        assert_eq!(outcome, NavOutcome::UnknownPage(PageId::new("missing")));
        assert_eq!(r.current(), &PageId::home());
        assert_eq!(view.active_pages(), vec![&PageId::home()]);
        assert_eq!(view.fragment_writes().len(), writes);
    }

    #[test]
    fn echo_of_own_write_is_a_no_op() {
        let mut view = MemoryView::stock();
        let mut r = router();
        let _ = r.initialize(&mut view);
        let _ = r.navigate_to(PageId::new("about"), &mut view);
        let writes = view.fragment_writes().len();
        let scrolls = view.scroll_requests().len();

        let outcome = r.on_fragment_changed(&mut view);
        assert_eq!(outcome, NavOutcome::AlreadyActive(PageId::new("about")));
        assert_eq!(view.fragment_writes().len(), writes);
        assert_eq!(view.scroll_requests().len(), scrolls);
    }

    #[test]
    fn back_navigation_follows_fragment() {
        let mut view = MemoryView::stock();
        let mut r = router();
        let _ = r.initialize(&mut view);
        let _ = r.navigate_to(PageId::new("about"), &mut view);

        view.set_external_fragment("#home");
        let outcome = r.on_fragment_changed(&mut view);
        assert_eq!(outcome, NavOutcome::Activated(PageId::home()));
        assert_eq!(view.active_pages(), vec![&PageId::home()]);
    }

    #[test]
    fn untargeted_affordance_is_ignored() {
        let mut view = MemoryView::stock().with_untargeted_nav(NavSet::Mobile);
        let mut r = router();
        let _ = r.initialize(&mut view);
        assert_eq!(r.on_nav_clicked(NavSet::Mobile, 6, &mut view), NavOutcome::NoTarget);
        assert_eq!(r.on_nav_clicked(NavSet::Mobile, 99, &mut view), NavOutcome::NoTarget);
    }
}
