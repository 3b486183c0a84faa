//! Filtering over the rendered catalog.
//!
//! # Invariants
//!
//! 1. **Substring on three fields**: a student is visible iff the lowercased
//!    query occurs in its name, skills, or college.
//! 2. **Clearing restores**: the empty query shows every student.
//! 3. **Exact category**: a project is visible iff the selected token is
//!    `all` or equals its category tag.
//! 4. **One selected button**: exactly one category button is selected after
//!    any click on an existing button.
//! 5. **Stable order**: filtering never reorders or removes cards.

use collab_core::catalog::{PROJECTS, STUDENTS};
use collab_core::event::{CardList, Event};
use collab_runtime::app::App;
use collab_runtime::filter::{ListFilter, Predicate};
use collab_runtime::memory_view::MemoryView;
use collab_runtime::storage::MemoryStorage;
use core::time::Duration;
use pretty_assertions::assert_eq;

fn app() -> App<MemoryView, MemoryStorage> {
    let mut app = App::new(MemoryView::stock(), MemoryStorage::new());
    app.init(false);
    app
}

#[test]
fn search_for_name_shows_single_student() {
    let mut app = app();
    let outcome = app.search_now("arjun");
    assert_eq!(outcome.visible, 1);
    assert_eq!(app.view().visible_cards(CardList::Students), vec![0]);
    assert_eq!(STUDENTS[0].name, "Arjun Patel");
}

#[test]
fn search_matches_skills_case_insensitively() {
    let mut app = app();
    let _ = app.search_now("REACT");
    assert_eq!(app.view().visible_cards(CardList::Students), vec![0, 2, 11]);
}

#[test]
fn search_matches_college() {
    let mut app = app();
    let _ = app.search_now("iit delhi");
    assert_eq!(app.view().visible_cards(CardList::Students), vec![1]);
}

#[test]
fn clearing_query_restores_everyone() {
    let mut app = app();
    let _ = app.search_now("arjun");
    let outcome = app.search_now("");
    assert_eq!(outcome.visible, STUDENTS.len());
    assert_eq!(outcome.changed, STUDENTS.len() - 1);
    assert_eq!(
        app.view().visible_cards(CardList::Students),
        (0..STUDENTS.len()).collect::<Vec<_>>()
    );
}

#[test]
fn search_leaves_projects_alone() {
    let mut app = app();
    let _ = app.search_now("zzz-no-match");
    assert!(app.view().visible_cards(CardList::Students).is_empty());
    assert_eq!(app.view().visible_cards(CardList::Projects).len(), PROJECTS.len());
}

#[test]
fn design_button_shows_only_design_project() {
    let mut app = app();
    let outcome = app.select_category(3).expect("design button");
    assert_eq!(outcome.visible, 1);
    assert_eq!(app.view().visible_cards(CardList::Projects), vec![2]);
    assert_eq!(app.view().selected_filters(), vec!["design"]);
    assert_eq!(app.state().filter.category, "design");
}

#[test]
fn all_button_restores_listing() {
    let mut app = app();
    let _ = app.select_category(1);
    let _ = app.select_category(0);
    assert_eq!(
        app.view().visible_cards(CardList::Projects),
        (0..PROJECTS.len()).collect::<Vec<_>>()
    );
    assert_eq!(app.view().selected_filters(), vec!["all"]);
}

#[test]
fn filter_click_event_on_missing_button_is_ignored() {
    let mut app = app();
    app.handle(Event::FilterClicked { index: 1 });
    app.handle(Event::FilterClicked { index: 42 });
    assert_eq!(app.view().selected_filters(), vec!["frontend"]);
    assert_eq!(app.state().filter.category, "frontend");
}

#[test]
fn frontend_and_backend_partition_the_tagged_listing() {
    let mut view = MemoryView::new().with_card_grids();
    let _ = collab_runtime::view::View::render_projects(&mut view, PROJECTS);
    let mut filter = ListFilter::projects(PROJECTS);

    let front = filter.apply(Predicate::category("frontend"), &mut view).visible;
    let back = filter.apply(Predicate::category("backend"), &mut view).visible;
    let design = filter.apply(Predicate::category("design"), &mut view).visible;
    assert_eq!(front + back + design, PROJECTS.len());
}

#[test]
fn debounced_typing_applies_final_query_once() {
    let mut app = app();
    for (i, partial) in ["a", "ar", "arj", "arju", "arjun"].into_iter().enumerate() {
        if i > 0 {
            app.advance_time(Duration::from_millis(100));
        }
        app.push_event(Event::SearchInput(partial.to_owned()));
        assert!(!app.step().search_applied);
    }
    assert_eq!(app.view().visible_cards(CardList::Students).len(), STUDENTS.len());

    app.advance_time(Duration::from_millis(300));
    assert!(app.step().search_applied);
    assert_eq!(app.view().visible_cards(CardList::Students), vec![0]);
    assert!(!app.step().search_applied);
}
