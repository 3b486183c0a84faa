#![forbid(unsafe_code)]

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use collab_core::event::{CardList, Event, FormId, NavSet, ThemeToggleSlot};
use collab_core::scroll::ScrollMetrics;
use collab_runtime::app::App;
use collab_runtime::config::AppConfig;
use core::time::Duration;
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, EventTarget, HtmlInputElement, MediaQueryList, MediaQueryListEvent, Window};
use web_time::Instant;

use crate::dom_view::DomView;
use crate::error::WebError;
use crate::local_storage::LocalStorage;
use crate::markup;
use crate::selectors;

type BrowserApp = App<DomView, LocalStorage>;

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

fn js_error(err: JsValue) -> WebError {
    WebError::Js(format!("{err:?}"))
}

/// State shared between the exported handle and every listener closure.
struct Shared {
    app: RefCell<BrowserApp>,
    window: Window,
    origin: Instant,
    timeout: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Shared {
    /// Feed one event through the loop and re-arm the debounce timer.
    fn dispatch(&self, event: Event) {
        let delay = {
            let Ok(mut app) = self.app.try_borrow_mut() else {
                warn!(kind = event.kind(), "event raised during dispatch dropped");
                return;
            };
            app.set_time(self.origin.elapsed());
            app.push_event(event);
            let result = app.step();
            result.next_deadline.map(|d| d.saturating_sub(app.now()))
        };
        self.schedule(delay);
    }

    fn schedule(&self, delay: Option<Duration>) {
        if let Some(handle) = self.timeout.take() {
            self.window.clear_timeout_with_handle(handle);
        }
        let Some(delay) = delay else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(callback) = tick.as_ref() else {
            return;
        };
        let ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), ms)
        {
            Ok(handle) => self.timeout.set(Some(handle)),
            Err(err) => warn!(?err, "debounce timer not armed"),
        }
    }

    fn cancel_timer(&self) {
        if let Some(handle) = self.timeout.take() {
            self.window.clear_timeout_with_handle(handle);
        }
        self.tick.borrow_mut().take();
    }
}

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

struct Mounted {
    shared: Rc<Shared>,
    listeners: Vec<Listener>,
    // Held so the `change` listener lives as long as the mount.
    _color_scheme: Option<MediaQueryList>,
}

impl Mounted {
    fn listen(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<(), WebError> {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(js_error)?;
        self.listeners.push(Listener {
            target: target.clone(),
            kind,
            callback,
        });
        Ok(())
    }

    /// Listen on `target`, mapping each DOM event to an app event.
    fn route(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        prevent_default: bool,
        map: impl Fn(&web_sys::Event) -> Option<Event> + 'static,
    ) -> Result<(), WebError> {
        let shared = Rc::downgrade(&self.shared);
        self.listen(target, kind, move |dom_event| {
            if prevent_default {
                dom_event.prevent_default();
            }
            if let (Some(shared), Some(event)) = (shared.upgrade(), map(&dom_event)) {
                shared.dispatch(event);
            }
        })
    }

    fn detach(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = listener
                .target
                .remove_event_listener_with_callback(listener.kind, listener.callback.as_ref().unchecked_ref());
        }
        self.shared.cancel_timer();
    }
}

/// Browser frontend of the Collabthon UI.
///
/// ```js
/// import init, { CollabWeb } from "./pkg/collab_web.js";
/// await init();
/// const ui = new CollabWeb();
/// ui.mount({ search_debounce_ms: 300 });
/// ```
#[wasm_bindgen]
pub struct CollabWeb {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl CollabWeb {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { mounted: None }
    }

    /// Bind to the current document: apply the theme, render the cards, show
    /// the initial page, and attach every listener.
    ///
    /// `options` is a plain object with any subset of the configuration
    /// fields; unknown fields are rejected.
    pub fn mount(&mut self, options: Option<JsValue>) -> Result<(), JsValue> {
        if self.mounted.is_some() {
            return Err(WebError::AlreadyMounted.into());
        }
        let config = parse_options(options)?;
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;

        let color_scheme = window
            .match_media(selectors::PREFERS_DARK_QUERY)
            .ok()
            .flatten();
        let prefers_dark = color_scheme.as_ref().is_some_and(MediaQueryList::matches);

        web_sys::console::log_1(&"🚀 Collabthon Database UI Replica Loaded".into());
        let storage = LocalStorage::new(&window);
        let mut app = App::with_config(DomView::new(window.clone(), document), storage, config);
        app.init(prefers_dark);

        let shared = Rc::new(Shared {
            app: RefCell::new(app),
            window: window.clone(),
            origin: Instant::now(),
            timeout: Cell::new(None),
            tick: RefCell::new(None),
        });
        *shared.tick.borrow_mut() = Some(tick_callback(Rc::downgrade(&shared)));

        let mut mounted = Mounted {
            shared,
            listeners: Vec::new(),
            _color_scheme: color_scheme.clone(),
        };
        if let Err(err) = attach(&mut mounted, &window, color_scheme.as_ref()) {
            mounted.detach();
            return Err(err.into());
        }

        web_sys::console::log_1(&"📊 Scroll effects initialized".into());
        info!(listeners = mounted.listeners.len(), "collab-web mounted");
        self.mounted = Some(mounted);
        Ok(())
    }

    /// Navigate to a page by id. Unknown ids are ignored.
    #[wasm_bindgen(js_name = showPage)]
    pub fn show_page(&mut self, page: &str) {
        let Some(mounted) = &self.mounted else {
            return;
        };
        if let Ok(mut app) = mounted.shared.app.try_borrow_mut() {
            let _ = app.navigate_to(page);
        }
    }

    /// Flip the theme as if the desktop toggle was clicked.
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&mut self) {
        if let Some(mounted) = &self.mounted {
            mounted.shared.dispatch(Event::ThemeToggleClicked(ThemeToggleSlot::Desktop));
        }
    }

    /// Id of the page currently shown, or `undefined` before mount.
    #[wasm_bindgen(js_name = currentPage)]
    pub fn current_page(&self) -> Option<String> {
        let mounted = self.mounted.as_ref()?;
        let app = mounted.shared.app.try_borrow().ok()?;
        Some(app.state().current_page.to_string())
    }

    /// Remove every listener and cancel pending work. The document keeps its
    /// current state.
    pub fn destroy(&mut self) {
        if let Some(mut mounted) = self.mounted.take() {
            mounted.detach();
        }
    }
}

impl Default for CollabWeb {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_options(options: Option<JsValue>) -> Result<AppConfig, WebError> {
    let Some(options) = options.filter(|v| !v.is_undefined() && !v.is_null()) else {
        return Ok(AppConfig::default());
    };
    let json = js_sys::JSON::stringify(&options)
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| WebError::Js("options are not serializable".into()))?;
    Ok(AppConfig::from_json(&json)?)
}

fn tick_callback(shared: Weak<Shared>) -> Closure<dyn FnMut()> {
    Closure::<dyn FnMut()>::new(move || {
        if let Some(shared) = shared.upgrade() {
            shared.timeout.set(None);
            shared.dispatch(Event::Tick);
        }
    })
}

/// Index of the card an event landed on, via its `data-index`.
fn card_index(event: &web_sys::Event, card_selector: &str) -> Option<usize> {
    let target: Element = event.target()?.dyn_into().ok()?;
    let card = target.closest(card_selector).ok()??;
    markup::parse_card_index(card.get_attribute(selectors::DATA_INDEX).as_deref())
}

fn attach(mounted: &mut Mounted, window: &Window, color_scheme: Option<&MediaQueryList>) -> Result<(), WebError> {
    let (nav, filters, anchors, document) = {
        let app = mounted.shared.app.borrow();
        let view = app.view();
        let nav = NavSet::ALL.map(|set| (set, view.query_all(selectors::nav_items(set))));
        (
            nav,
            view.query_all(selectors::FILTER_BUTTON),
            view.query_all(selectors::IN_PAGE_ANCHOR),
            view.document().clone(),
        )
    };

    for (set, items) in nav {
        for (index, item) in items.iter().enumerate() {
            mounted.route(item, "click", true, move |_| Some(Event::NavClicked { set, index }))?;
        }
    }
    mounted.route(window, "hashchange", false, |_| Some(Event::FragmentChanged))?;

    for slot in ThemeToggleSlot::ALL {
        if let Some(toggle) = document.get_element_by_id(selectors::theme_toggle_id(slot)) {
            mounted.route(&toggle, "click", false, move |_| Some(Event::ThemeToggleClicked(slot)))?;
        }
    }
    if let Some(query) = color_scheme {
        mounted.route(query, "change", false, |e| {
            let change = e.dyn_ref::<MediaQueryListEvent>()?;
            Some(Event::ColorSchemeChanged {
                prefers_dark: change.matches(),
            })
        })?;
    }
    if let Some(toggle) = document.get_element_by_id(selectors::MENU_TOGGLE_ID) {
        mounted.route(&toggle, "click", false, |_| Some(Event::MenuToggleClicked))?;
    }

    if let Some(input) = document.get_element_by_id(selectors::SEARCH_INPUT_ID) {
        mounted.route(&input, "input", false, |e| {
            let input = e.target()?.dyn_into::<HtmlInputElement>().ok()?;
            Some(Event::SearchInput(input.value()))
        })?;
    }
    for (index, button) in filters.iter().enumerate() {
        mounted.route(button, "click", false, move |_| Some(Event::FilterClicked { index }))?;
    }

    for (list, grid_id, card) in [
        (CardList::Students, selectors::STUDENT_GRID_ID, selectors::STUDENT_CARD),
        (CardList::Projects, selectors::PROJECT_GRID_ID, selectors::PROJECT_CARD),
    ] {
        if let Some(grid) = document.get_element_by_id(grid_id) {
            mounted.route(&grid, "click", false, move |e| {
                card_index(e, card).map(|index| Event::CardClicked { list, index })
            })?;
        }
    }

    for form in FormId::ALL {
        if let Some(el) = document.get_element_by_id(form.element_id()) {
            mounted.route(&el, "submit", true, move |_| Some(Event::FormSubmitted(form)))?;
        }
    }

    // Nav items that are also anchors are handled by the router.
    for anchor in anchors.iter().filter(|a| !a.has_attribute(selectors::DATA_PAGE)) {
        let Some(id) = anchor
            .get_attribute("href")
            .and_then(|href| href.strip_prefix('#').map(str::to_owned))
            .filter(|id| !id.is_empty())
        else {
            continue;
        };
        mounted.route(anchor, "click", true, move |_| Some(Event::AnchorClicked(id.clone())))?;
    }

    let scroll_window = window.clone();
    let scroll_document = document.clone();
    mounted.route(window, "scroll", false, move |_| {
        let offset = scroll_window.scroll_y().ok()?;
        let viewport = scroll_window.inner_height().ok()?.as_f64()?;
        let height = f64::from(scroll_document.document_element()?.scroll_height());
        Some(Event::Scrolled(ScrollMetrics::new(offset, height, viewport)))
    })?;
    if let Some(button) = document.get_element_by_id(selectors::BACK_TO_TOP_ID) {
        mounted.route(&button, "click", false, |_| Some(Event::BackToTopClicked))?;
    }

    Ok(())
}
