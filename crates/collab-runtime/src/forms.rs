#![forbid(unsafe_code)]

//! Form submissions and card activation.
//!
//! Nothing is transmitted. A submission shows a fixed acknowledgement and
//! clears the form; a card click shows a placeholder detail message.

use collab_core::catalog::{PROJECTS, STUDENTS};
use collab_core::event::{CardList, FormId};

use crate::view::View;

/// Acknowledgement shown after a form is submitted.
#[must_use]
pub const fn acknowledgement(form: FormId) -> &'static str {
    match form {
        FormId::Project => "Project posted successfully! Students will be notified.",
        FormId::Contact => {
            "Thank you for your submission! We'll connect you with suitable collaborators soon."
        }
    }
}

/// Message shown when a student card is clicked.
#[must_use]
pub fn student_profile_message(name: &str) -> String {
    format!(
        "Viewing profile for {name}\n\nIn a real application, this would show detailed student information."
    )
}

/// Message shown when a project card is clicked.
#[must_use]
pub fn project_details_message(title: &str) -> String {
    format!(
        "Viewing details for: {title}\n\nIn a real application, this would show full project details and application form."
    )
}

/// Acknowledge and reset `form`. Returns `false` if the form does not exist.
pub fn submit(form: FormId, view: &mut impl View) -> bool {
    if !view.has_form(form) {
        return false;
    }
    view.show_message(acknowledgement(form));
    view.reset_form(form);
    true
}

/// Show the detail message for the card at `index` in `list`.
///
/// Returns `false` if there is no such card.
pub fn activate_card(list: CardList, index: usize, view: &mut impl View) -> bool {
    let message = match list {
        CardList::Students => STUDENTS.get(index).map(|s| student_profile_message(s.name)),
        CardList::Projects => PROJECTS.get(index).map(|p| project_details_message(p.title)),
    };
    match message {
        Some(text) => {
            view.show_message(&text);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_view::MemoryView;

    #[test]
    fn submit_shows_ack_and_resets() {
        let mut view = MemoryView::new().with_form(FormId::Contact);
        assert!(submit(FormId::Contact, &mut view));
        assert_eq!(view.form_resets(FormId::Contact), Some(1));
        assert_eq!(view.messages(), [acknowledgement(FormId::Contact)]);
    }

    #[test]
    fn missing_form_is_inert() {
        let mut view = MemoryView::new();
        assert!(!submit(FormId::Project, &mut view));
        assert!(view.messages().is_empty());
    }

    #[test]
    fn card_messages_name_the_record() {
        let mut view = MemoryView::new();
        assert!(activate_card(CardList::Students, 0, &mut view));
        assert!(activate_card(CardList::Projects, 2, &mut view));
        assert!(view.messages()[0].starts_with("Viewing profile for Arjun Patel\n\n"));
        assert!(view.messages()[1].starts_with("Viewing details for: EdTech Platform UI/UX Redesign"));
        assert!(!activate_card(CardList::Projects, 100, &mut view));
    }
}
