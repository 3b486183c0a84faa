//! Property-based invariant tests for the page router.
//!
//! # Running Tests
//!
//! ```sh
//! cargo test -p collab-runtime --test proptest_router_invariants
//! ```
//!
//! # Invariants
//!
//! 1. **Single active page**: after any navigation sequence exactly one
//!    container is active and it equals the router's current page.
//! 2. **Indicator agreement**: every affordance in both navigation sets is
//!    active iff it targets the current page.
//! 3. **Unknown ids are inert**: navigating to an id with no container changes
//!    neither the active page nor the fragment.
//! 4. **Fragment round trip**: the fragment always names the current page, and
//!    reloading with that fragment lands on the same page.
//! 5. **Echo stability**: a fragment-change notification for the page already
//!    showing writes nothing.

use collab_core::event::NavSet;
use collab_core::page::PageId;
use collab_runtime::memory_view::{MemoryView, STOCK_PAGES};
use collab_runtime::router::{NavOutcome, Router};
use collab_runtime::view::View;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Navigate(usize),
    Unknown(String),
    Click(NavSet, usize),
    External(usize),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0..STOCK_PAGES.len()).prop_map(Step::Navigate),
        "[a-z]{1,8}-x".prop_map(Step::Unknown),
        (any::<bool>(), 0..STOCK_PAGES.len() + 2).prop_map(|(mobile, i)| {
            let set = if mobile { NavSet::Mobile } else { NavSet::Desktop };
            Step::Click(set, i)
        }),
        (0..STOCK_PAGES.len()).prop_map(Step::External),
    ]
}

fn assert_consistent(router: &Router, view: &MemoryView) {
    let current = router.current();
    assert_eq!(view.active_pages(), vec![current]);
    assert_eq!(PageId::from_fragment(&view.fragment()).as_ref(), Some(current));
    for set in NavSet::ALL {
        let expected: Vec<bool> = view
            .nav_targets(set)
            .iter()
            .map(|t| t.as_ref() == Some(current))
            .collect();
        assert_eq!(view.nav_active(set), expected);
    }
}

proptest! {
    #[test]
    fn any_sequence_keeps_one_active_page(steps in prop::collection::vec(step(), 1..40)) {
        let mut view = MemoryView::stock();
        let mut router = Router::new(PageId::home());
        let _ = router.initialize(&mut view);

        for s in steps {
            match s {
                Step::Navigate(i) => {
                    let _ = router.navigate_to(PageId::new(STOCK_PAGES[i]), &mut view);
                }
                Step::Unknown(id) => {
                    let before = router.current().clone();
                    let writes = view.fragment_writes().len();
                    let outcome = router.navigate_to(PageId::new(id.clone()), &mut view);
                    prop_assert_eq!(outcome, NavOutcome::UnknownPage(PageId::new(id)));
                    prop_assert_eq!(router.current(), &before);
                    prop_assert_eq!(view.fragment_writes().len(), writes);
                }
                Step::Click(set, i) => {
                    let _ = router.on_nav_clicked(set, i, &mut view);
                }
                Step::External(i) => {
                    view.set_external_fragment(&format!("#{}", STOCK_PAGES[i]));
                    let _ = router.on_fragment_changed(&mut view);
                }
            }
            assert_consistent(&router, &view);

            let writes = view.fragment_writes().len();
            let echo = router.on_fragment_changed(&mut view);
            prop_assert!(matches!(echo, NavOutcome::AlreadyActive(_)));
            prop_assert_eq!(view.fragment_writes().len(), writes);
        }
    }

    #[test]
    fn reload_with_fragment_matches_navigation(i in 0..STOCK_PAGES.len()) {
        let page = PageId::new(STOCK_PAGES[i]);

        let mut navigated = MemoryView::stock();
        let mut a = Router::new(PageId::home());
        let _ = a.initialize(&mut navigated);
        let _ = a.navigate_to(page.clone(), &mut navigated);

        let mut reloaded = MemoryView::stock().with_fragment(&navigated.fragment());
        let mut b = Router::new(PageId::home());
        let _ = b.initialize(&mut reloaded);

        prop_assert_eq!(b.current(), &page);
        prop_assert_eq!(reloaded.active_pages(), navigated.active_pages());
        for set in NavSet::ALL {
            prop_assert_eq!(reloaded.nav_active(set), navigated.nav_active(set));
        }
    }
}

#[test]
fn missing_nav_set_does_not_block_routing() {
    let mut view = MemoryView::new()
        .with_pages(&STOCK_PAGES)
        .with_nav(NavSet::Desktop, &STOCK_PAGES);
    let mut router = Router::new(PageId::home());
    let _ = router.initialize(&mut view);
    let outcome = router.on_nav_clicked(NavSet::Desktop, 4, &mut view);
    assert_eq!(outcome, NavOutcome::Activated(PageId::new("about")));
    assert!(view.nav_active(NavSet::Mobile).is_empty());
}
