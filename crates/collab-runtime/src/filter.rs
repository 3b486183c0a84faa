#![forbid(unsafe_code)]

//! Card list filtering.
//!
//! A [`ListFilter`] holds the queryable fields of every rendered card plus
//! the visibility it last applied. Applying a [`Predicate`] recomputes
//! visibility for every card and pushes only the flips to the view; cards are
//! never removed or reordered.
//!
//! Two predicates exist:
//!
//! - **Text**: the lowercased query must be a substring of at least one
//!   searchable field (fields are lowercased once, at construction). The empty
//!   query matches everything. Project cards carry no searchable fields.
//! - **Category**: the token must be [`CATEGORY_ALL`] or equal the card's
//!   category tag exactly.

use collab_core::catalog::{Project, Student};
use collab_core::event::CardList;
use tracing::trace;

use crate::view::View;

/// Category token that matches every card.
pub const CATEGORY_ALL: &str = "all";

/// Queryable fields of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRecord {
    haystacks: Vec<String>,
    category: Option<String>,
}

impl FilterRecord {
    /// Build a record from searchable fields and an optional category tag.
    #[must_use]
    pub fn new<'a>(fields: impl IntoIterator<Item = &'a str>, category: Option<&str>) -> Self {
        Self {
            haystacks: fields.into_iter().map(str::to_lowercase).collect(),
            category: category.map(str::to_owned),
        }
    }

    /// Record for a student card: name, skills, college.
    #[must_use]
    pub fn from_student(student: &Student) -> Self {
        Self::new(student.searchable_fields(), None)
    }

    /// Record for a project card: tagged by category, not text-searchable.
    #[must_use]
    pub fn from_project(project: &Project) -> Self {
        Self::new([], Some(project.category))
    }

    /// Category tag, if the card has one.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// A visibility predicate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Predicate {
    /// Everything visible.
    #[default]
    All,
    /// Case-insensitive substring match on searchable fields.
    Text(String),
    /// Exact category match, or [`CATEGORY_ALL`].
    Category(String),
}

impl Predicate {
    /// Text predicate for a raw query; the query is lowercased here.
    #[must_use]
    pub fn text(query: &str) -> Self {
        Self::Text(query.to_lowercase())
    }

    /// Category predicate for a token.
    #[must_use]
    pub fn category(token: impl Into<String>) -> Self {
        Self::Category(token.into())
    }

    /// Whether `record` passes.
    #[must_use]
    pub fn matches(&self, record: &FilterRecord) -> bool {
        match self {
            Self::All => true,
            Self::Text(query) => record.haystacks.iter().any(|h| h.contains(query.as_str())),
            Self::Category(token) => {
                token == CATEGORY_ALL || record.category.as_deref() == Some(token.as_str())
            }
        }
    }
}

/// Counts from one [`ListFilter::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOutcome {
    /// Cards visible afterwards.
    pub visible: usize,
    /// Cards hidden afterwards.
    pub hidden: usize,
    /// Cards whose visibility flipped.
    pub changed: usize,
}

/// Visibility state of one rendered card list.
#[derive(Debug, Clone)]
pub struct ListFilter {
    list: CardList,
    records: Vec<FilterRecord>,
    visible: Vec<bool>,
    predicate: Predicate,
}

impl ListFilter {
    /// Create a filter with every card visible.
    #[must_use]
    pub fn new(list: CardList, records: Vec<FilterRecord>) -> Self {
        let visible = vec![true; records.len()];
        Self {
            list,
            records,
            visible,
            predicate: Predicate::All,
        }
    }

    /// Filter over the student roster.
    #[must_use]
    pub fn students(students: &[Student]) -> Self {
        Self::new(
            CardList::Students,
            students.iter().map(FilterRecord::from_student).collect(),
        )
    }

    /// Filter over the project listing.
    #[must_use]
    pub fn projects(projects: &[Project]) -> Self {
        Self::new(
            CardList::Projects,
            projects.iter().map(FilterRecord::from_project).collect(),
        )
    }

    #[must_use]
    pub const fn list(&self) -> CardList {
        self.list
    }

    /// The predicate last applied.
    #[must_use]
    pub const fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Visibility of each card, in document order.
    #[must_use]
    pub fn visibility(&self) -> &[bool] {
        &self.visible
    }

    /// Indices of visible cards.
    #[must_use]
    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.then_some(i))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Apply `predicate`, pushing visibility flips to `view`.
    pub fn apply(&mut self, predicate: Predicate, view: &mut impl View) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();
        for (index, (record, shown)) in self.records.iter().zip(self.visible.iter_mut()).enumerate() {
            let next = predicate.matches(record);
            if next != *shown {
                *shown = next;
                outcome.changed += 1;
                view.set_card_visible(self.list, index, next);
            }
            if next {
                outcome.visible += 1;
            } else {
                outcome.hidden += 1;
            }
        }
        trace!(
            list = ?self.list,
            predicate = ?predicate,
            visible = outcome.visible,
            changed = outcome.changed,
            "filter applied"
        );
        self.predicate = predicate;
        outcome
    }
}

/// Category filter buttons: exactly one selected at a time.
#[derive(Debug, Clone, Default)]
pub struct CategoryBar {
    selected: Option<String>,
}

impl CategoryBar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Token of the selected button.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select the button at `index`, deselecting every other one.
    ///
    /// Returns the button's token, or `None` (and touches nothing) if there is
    /// no such button.
    pub fn select(&mut self, index: usize, view: &mut impl View) -> Option<String> {
        let tokens = view.filter_tokens();
        let token = tokens.get(index)?.clone();
        for i in 0..tokens.len() {
            view.set_filter_selected(i, i == index);
        }
        self.selected = Some(token.clone());
        Some(token)
    }

    /// Select the first button whose token is `token`.
    ///
    /// Returns its index, or `None` if no button carries that token.
    pub fn select_token(&mut self, token: &str, view: &mut impl View) -> Option<usize> {
        let index = view.filter_tokens().iter().position(|t| t == token)?;
        self.select(index, view).map(|_| index)
    }
}
