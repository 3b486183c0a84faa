//! Card markup against the hooks the runtime and listeners rely on.
//!
//! # Invariants
//!
//! 1. **One card per record**: each grid contains exactly one card root per
//!    catalog entry, numbered `0..n` in `data-index`.
//! 2. **Search hooks present**: every student card exposes name, skills and
//!    college under their hook classes.
//! 3. **Category hook present**: every project card carries its exact
//!    category in `data-category`.
//! 4. **Escaped content**: record text never opens a tag.

use collab_core::catalog::{PROJECTS, STUDENTS, Student};
use collab_web::markup::{escape, project_grid, student_card, student_grid};
use collab_web::selectors;
use pretty_assertions::assert_eq;

#[test]
fn student_grid_has_one_card_per_record() {
    let html = student_grid(STUDENTS);
    assert_eq!(html.matches(r#"class="student-card "#).count(), STUDENTS.len());
    for i in 0..STUDENTS.len() {
        assert!(html.contains(&format!(r#"data-index="{i}""#)), "missing card {i}");
    }
}

#[test]
fn project_grid_tags_every_card() {
    let html = project_grid(PROJECTS);
    assert_eq!(html.matches(r#"class="project-card "#).count(), PROJECTS.len());
    for project in PROJECTS {
        assert!(html.contains(&format!(r#"data-category="{}""#, project.category)));
    }
}

#[test]
fn student_cards_expose_search_fields() {
    for (i, student) in STUDENTS.iter().enumerate() {
        let html = student_card(i, student);
        for (hook, field) in [
            ("student-name", student.name),
            ("student-skills", student.skills),
            ("student-college", student.college),
        ] {
            assert!(html.contains(hook), "{hook} missing on card {i}");
            assert!(html.contains(&*escape(field)), "{hook} text missing on card {i}");
        }
    }
}

#[test]
fn hostile_record_is_escaped() {
    let student = Student {
        name: "<script>alert(1)</script>",
        bio: "\"quoted\" & 'single'",
        ..STUDENTS[0]
    };
    let html = student_card(0, &student);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("&quot;quoted&quot; &amp; &#39;single&#39;"));
}

#[test]
fn card_selectors_match_markup_classes() {
    let student = student_card(0, &STUDENTS[0]);
    let class = selectors::STUDENT_CARD.trim_start_matches('.');
    assert!(student.starts_with(&format!(r#"<div class="{class} "#)));
}
