//! Property-based invariant tests for list filtering.
//!
//! # Invariants
//!
//! 1. **Agreement**: after `apply`, the view shows exactly the cards the
//!    predicate matches, in catalog order.
//! 2. **Case folding**: a query and its uppercase form select the same cards.
//! 3. **Monotone narrowing**: extending a query never reveals a card the
//!    shorter query hid.
//! 4. **Idempotence**: applying the same predicate twice flips nothing.

use collab_core::catalog::{PROJECTS, STUDENTS};
use collab_core::event::CardList;
use collab_runtime::filter::{FilterRecord, ListFilter, Predicate};
use collab_runtime::memory_view::MemoryView;
use collab_runtime::view::View;
use proptest::prelude::*;

fn rendered() -> MemoryView {
    let mut view = MemoryView::new().with_card_grids();
    let _ = view.render_students(STUDENTS);
    let _ = view.render_projects(PROJECTS);
    view
}

fn query() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,4}",
        prop::sample::select(vec!["react", "iit", "python", "design", "pune", "aws"]).prop_map(str::to_owned),
    ]
}

proptest! {
    #[test]
    fn view_agrees_with_predicate(q in query()) {
        let mut view = rendered();
        let mut filter = ListFilter::students(STUDENTS);
        let outcome = filter.apply(Predicate::text(&q), &mut view);

        let expected: Vec<usize> = STUDENTS
            .iter()
            .enumerate()
            .filter(|(_, s)| Predicate::text(&q).matches(&FilterRecord::from_student(s)))
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(view.visible_cards(CardList::Students), expected.clone());
        prop_assert_eq!(outcome.visible, expected.len());
        prop_assert_eq!(outcome.visible + outcome.hidden, STUDENTS.len());
    }

    #[test]
    fn uppercase_query_selects_same_cards(q in query()) {
        let mut lower = rendered();
        let mut upper = rendered();
        let _ = ListFilter::students(STUDENTS).apply(Predicate::text(&q), &mut lower);
        let _ = ListFilter::students(STUDENTS).apply(Predicate::text(&q.to_uppercase()), &mut upper);
        prop_assert_eq!(lower.visible_cards(CardList::Students), upper.visible_cards(CardList::Students));
    }

    #[test]
    fn longer_query_only_narrows(q in query(), suffix in "[a-z]{1,3}") {
        let mut view = rendered();
        let mut filter = ListFilter::students(STUDENTS);
        let _ = filter.apply(Predicate::text(&q), &mut view);
        let wide = filter.visible_indices();
        let _ = filter.apply(Predicate::text(&format!("{q}{suffix}")), &mut view);
        for i in filter.visible_indices() {
            prop_assert!(wide.contains(&i));
        }
    }

    #[test]
    fn reapplying_flips_nothing(token in prop::sample::select(vec!["all", "frontend", "backend", "design", "other"])) {
        let mut view = rendered();
        let mut filter = ListFilter::projects(PROJECTS);
        let _ = filter.apply(Predicate::category(token), &mut view);
        let again = filter.apply(Predicate::category(token), &mut view);
        prop_assert_eq!(again.changed, 0);
    }
}
