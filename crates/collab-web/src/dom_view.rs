#![forbid(unsafe_code)]

//! [`View`] over the live document.
//!
//! Every lookup is re-run on each call rather than cached: the card grids are
//! replaced wholesale on render, and a missing element simply turns the
//! corresponding operation into a no-op.

use collab_core::catalog::{Project, Student};
use collab_core::event::{CardList, FormId, NavSet, ThemeToggleSlot};
use collab_core::page::PageId;
use collab_runtime::view::View;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

use crate::markup;
use crate::selectors;

/// The browser document, seen through the [`View`] trait.
pub struct DomView {
    window: Window,
    document: Document,
}

impl DomView {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Every element matching `selector`, in document order.
    pub(crate) fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            debug!(selector, "invalid selector");
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn form(&self, form: FormId) -> Option<HtmlFormElement> {
        self.by_id(form.element_id())?.dyn_into().ok()
    }

    fn set_style(element: Option<Element>, property: &str, value: &str) {
        if let Some(el) = element.and_then(|e| e.dyn_into::<HtmlElement>().ok()) {
            let _ = el.style().set_property(property, value);
        }
    }
}

fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

fn card_selector(list: CardList) -> &'static str {
    match list {
        CardList::Students => selectors::STUDENT_CARD,
        CardList::Projects => selectors::PROJECT_CARD,
    }
}

impl View for DomView {
    fn page_ids(&self) -> Vec<PageId> {
        self.query_all(selectors::PAGE)
            .iter()
            .filter_map(|el| PageId::from_fragment(&el.id()))
            .collect()
    }

    fn has_page(&self, page: &PageId) -> bool {
        self.by_id(page.as_str())
            .is_some_and(|el| el.class_list().contains("page"))
    }

    fn set_page_active(&mut self, page: &PageId, active: bool) {
        if let Some(el) = self.by_id(page.as_str()) {
            set_class(&el, selectors::ACTIVE_CLASS, active);
        }
    }

    fn nav_targets(&self, set: NavSet) -> Vec<Option<PageId>> {
        self.query_all(selectors::nav_items(set))
            .iter()
            .map(|el| {
                el.get_attribute(selectors::DATA_PAGE)
                    .and_then(|target| PageId::from_fragment(&target))
            })
            .collect()
    }

    fn set_nav_active(&mut self, set: NavSet, index: usize, active: bool) {
        if let Some(el) = self.query_all(selectors::nav_items(set)).get(index) {
            set_class(el, selectors::ACTIVE_CLASS, active);
        }
    }

    fn fragment(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn set_fragment(&mut self, fragment: &str) {
        if let Err(err) = self.window.location().set_hash(fragment) {
            debug!(?err, "fragment write rejected");
        }
    }

    fn scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&mut self, id: &str) -> bool {
        let Some(el) = self.by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn set_dark_class(&mut self, dark: bool) {
        if let Some(root) = self.document.document_element() {
            set_class(&root, selectors::DARK_CLASS, dark);
        }
    }

    fn set_theme_icon(&mut self, slot: ThemeToggleSlot, icon: &str) {
        if let Some(el) = self.query(selectors::theme_icon(slot)) {
            el.set_text_content(Some(icon));
        }
    }

    fn has_menu(&self) -> bool {
        self.by_id(selectors::MOBILE_MENU_ID).is_some() && self.by_id(selectors::MENU_TOGGLE_ID).is_some()
    }

    fn set_menu_open(&mut self, open: bool) {
        if let Some(menu) = self.by_id(selectors::MOBILE_MENU_ID) {
            set_class(&menu, selectors::HIDDEN_CLASS, !open);
        }
        if let Some(toggle) = self.by_id(selectors::MENU_TOGGLE_ID) {
            set_class(&toggle, selectors::ACTIVE_CLASS, open);
        }
    }

    fn render_students(&mut self, students: &[Student]) -> bool {
        match self.by_id(selectors::STUDENT_GRID_ID) {
            Some(grid) => {
                grid.set_inner_html(&markup::student_grid(students));
                true
            }
            None => false,
        }
    }

    fn render_projects(&mut self, projects: &[Project]) -> bool {
        match self.by_id(selectors::PROJECT_GRID_ID) {
            Some(grid) => {
                grid.set_inner_html(&markup::project_grid(projects));
                true
            }
            None => false,
        }
    }

    fn set_card_visible(&mut self, list: CardList, index: usize, visible: bool) {
        let card = self.query_all(card_selector(list)).into_iter().nth(index);
        Self::set_style(card, "display", if visible { "block" } else { "none" });
    }

    fn filter_tokens(&self) -> Vec<String> {
        self.query_all(selectors::FILTER_BUTTON)
            .iter()
            .map(|el| el.get_attribute(selectors::DATA_FILTER).unwrap_or_default())
            .collect()
    }

    fn set_filter_selected(&mut self, index: usize, selected: bool) {
        if let Some(el) = self.query_all(selectors::FILTER_BUTTON).get(index) {
            set_class(el, selectors::ACTIVE_CLASS, selected);
        }
    }

    fn has_form(&self, form: FormId) -> bool {
        self.form(form).is_some()
    }

    fn reset_form(&mut self, form: FormId) {
        if let Some(el) = self.form(form) {
            el.reset();
        }
    }

    fn show_message(&mut self, text: &str) {
        if let Err(err) = self.window.alert_with_message(text) {
            debug!(?err, "alert suppressed");
        }
    }

    fn set_scroll_progress(&mut self, ratio: f64) {
        Self::set_style(
            self.query(selectors::PROGRESS_BAR),
            "transform",
            &format!("scaleX({ratio})"),
        );
    }

    fn set_back_to_top_visible(&mut self, visible: bool) {
        if let Some(el) = self.by_id(selectors::BACK_TO_TOP_ID) {
            set_class(&el, selectors::VISIBLE_CLASS, visible);
        }
    }

    fn set_hero_offset(&mut self, px: f64) {
        Self::set_style(
            self.query(selectors::HERO),
            "transform",
            &format!("translateY({px}px)"),
        );
    }
}
